use anyhow::{Result, bail};
use itertools::Itertools;
use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

use hero_scatter::entities::{
    CanvasSpec, PlanInput, Placement, PlacementStatus, RelaxReason, SpriteSize,
};
use hero_scatter::geometry::primitives::Point;
use hero_scatter::geometry::{Footprint, fits_within_canvas, overlap_ratio, rotated_footprint};

use crate::config::SearchConfig;
use crate::opt::loss::CandidateLoss;
use crate::samplers::center_sampler::UniformCenterSampler;
use crate::samplers::transform_sampler::TransformSampler;

/// A sampled placement of a sprite, not yet accepted or relaxed.
#[derive(Clone, Copy, Debug)]
pub struct Candidate {
    pub scale: f64,
    pub rotation: f64,
    pub center: Point,
    pub loss: CandidateLoss,
}

impl Candidate {
    pub fn into_placement(self, sprite_id: usize, status: PlacementStatus) -> Placement {
        Placement {
            sprite_id,
            center: self.center,
            scale: self.scale,
            rotation: self.rotation,
            status,
        }
    }
}

/// Scale at which the sprites together roughly cover `fill_fraction` of the canvas.
/// Sprites are only ever scaled down, never up.
pub fn baseline_scale(
    size: &SpriteSize,
    canvas: &CanvasSpec,
    n_sprites: usize,
    fill_fraction: f64,
) -> f64 {
    let target_dim = (fill_fraction * canvas.area() / n_sprites.max(1) as f64).sqrt();
    let max_side = size.max_side();
    match max_side > target_dim {
        true => target_dim / max_side,
        false => 1.0,
    }
}

/// Samples candidates for a sprite until one lies within the canvas and respects the overlap
/// allowance towards every earlier placement (`placed`).
/// If the attempt budget runs out, the best candidate seen is returned as a relaxed placement.
pub fn search(
    sprite_id: usize,
    input: &PlanInput,
    placed: &[(Footprint, Point)],
    sampler: &TransformSampler,
    config: &SearchConfig,
    rng: &mut impl Rng,
    sample_counter: &mut usize,
) -> Result<Placement> {
    let size = &input.sprites[sprite_id];
    let canvas = &input.canvas;
    let baseline = baseline_scale(size, canvas, input.sprites.len(), config.fill_fraction);
    let max_overlap_ratio = input.variation.max_overlap_ratio();

    let mut best: Option<Candidate> = None;

    for attempt in 0..config.n_attempts_per_sprite {
        let (multiplier, rotation) = sampler.sample(rng);
        let scale = baseline * multiplier;
        let footprint = rotated_footprint(size, scale, rotation);
        let center_sampler = UniformCenterSampler::new(footprint, canvas)?;

        //redraw the position until it fits, a forced candidate never will
        let mut center = center_sampler.sample(rng);
        let mut fits = fits_within_canvas(footprint, center, canvas);
        *sample_counter += 1;
        if !center_sampler.is_forced() {
            for _ in 1..config.n_position_attempts {
                if fits {
                    break;
                }
                center = center_sampler.sample(rng);
                fits = fits_within_canvas(footprint, center, canvas);
                *sample_counter += 1;
            }
        }

        let max_overlap = placed
            .iter()
            .map(|(fp, c)| overlap_ratio(footprint, center, *fp, *c))
            .fold(0.0, f64::max);

        let candidate = Candidate {
            scale,
            rotation,
            center,
            loss: CandidateLoss::new(!fits, max_overlap),
        };

        if fits && max_overlap <= max_overlap_ratio {
            trace!(
                "[PLAN] sprite {sprite_id}: valid candidate after {} attempt(s)",
                attempt + 1
            );
            return Ok(candidate.into_placement(sprite_id, PlacementStatus::Accepted));
        }

        //strict improvement only, the earliest candidate wins ties
        if best.is_none_or(|b| candidate.loss < b.loss) {
            debug!(
                "[PLAN] sprite {sprite_id} [{attempt}/{}] better: {:?}",
                config.n_attempts_per_sprite, candidate.loss
            );
            best = Some(candidate);
        }
    }

    let Some(best) = best else {
        bail!("no candidates were sampled for sprite {sprite_id}");
    };
    let reason = match best.loss.exceeds_canvas {
        true => RelaxReason::Containment,
        false => RelaxReason::Overlap,
    };
    Ok(best.into_placement(sprite_id, PlacementStatus::Relaxed(reason)))
}

/// The order in which the sprites are placed: input order, or a random permutation of it.
pub fn placement_order(n_sprites: usize, shuffle: bool, rng: &mut impl Rng) -> Vec<usize> {
    let mut order = (0..n_sprites).collect_vec();
    if shuffle {
        order.shuffle(rng);
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use hero_scatter::entities::VariationParams;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use test_case::test_case;

    fn input(canvas: (u32, u32), sprites: &[(u32, u32)], variation: VariationParams) -> PlanInput {
        PlanInput::new(
            CanvasSpec::try_new(canvas.0, canvas.1).unwrap(),
            sprites
                .iter()
                .map(|&(w, h)| SpriteSize::try_new(w, h).unwrap())
                .collect(),
            variation,
            Some(0),
        )
    }

    #[test_case((100, 100), (1440, 720), 1, 1.0; "small sprite is never upscaled")]
    #[test_case((1000, 500), (1000, 1000), 4, 0.387_298_334_620_741_7; "large sprite is scaled down")]
    #[test_case((454, 454), (1440, 720), 8, 0.614_217_623_187_079_3; "many sprites share the canvas")]
    fn baseline(size: (u32, u32), canvas: (u32, u32), n: usize, expected: f64) {
        let size = SpriteSize::try_new(size.0, size.1).unwrap();
        let canvas = CanvasSpec::try_new(canvas.0, canvas.1).unwrap();
        let scale = baseline_scale(&size, &canvas, n, 0.6);
        assert!(
            approx_eq!(f64, scale, expected, epsilon = 1e-9),
            "{scale} != {expected}"
        );
    }

    #[test]
    fn empty_canvas_accepts_first_candidate() {
        let input = input((1440, 720), &[(100, 100)], VariationParams::default());
        let config = SearchConfig::default();
        let sampler = TransformSampler::new(&input.variation, config.min_scale_multiplier).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        let mut n_samples = 0;

        let placement = search(0, &input, &[], &sampler, &config, &mut rng, &mut n_samples).unwrap();
        assert_eq!(placement.status, PlacementStatus::Accepted);
        assert_eq!(placement.scale, 1.0);
        assert_eq!(placement.rotation, 0.0);
        assert_eq!(n_samples, 1);
    }

    #[test]
    fn oversized_sprite_is_relaxed_to_the_canvas_center() {
        //even at baseline scale the sprite is taller than the canvas
        let input = input((100, 10), &[(40, 40)], VariationParams::default());
        let config = SearchConfig::default();
        let sampler = TransformSampler::new(&input.variation, config.min_scale_multiplier).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        let mut n_samples = 0;

        let placement = search(0, &input, &[], &sampler, &config, &mut rng, &mut n_samples).unwrap();
        assert_eq!(
            placement.status,
            PlacementStatus::Relaxed(RelaxReason::Containment)
        );
        assert_eq!(placement.center.y(), 5.0);
        //forced candidates skip the position retries
        assert_eq!(n_samples, config.n_attempts_per_sprite);
    }

    #[test]
    fn blocked_canvas_relaxes_overlap() {
        let input = input((100, 100), &[(10, 10)], VariationParams::default());
        let blocker = (
            Footprint {
                width: 100.0,
                height: 100.0,
            },
            Point(50.0, 50.0),
        );
        let config = SearchConfig {
            n_attempts_per_sprite: 20,
            ..SearchConfig::default()
        };
        let sampler = TransformSampler::new(&input.variation, config.min_scale_multiplier).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let mut n_samples = 0;

        let placement =
            search(0, &input, &[blocker], &sampler, &config, &mut rng, &mut n_samples).unwrap();
        assert_eq!(
            placement.status,
            PlacementStatus::Relaxed(RelaxReason::Overlap)
        );
        assert!(fits_within_canvas(
            placement.footprint(&input.sprites[0]),
            placement.center,
            &input.canvas
        ));
        assert_eq!(n_samples, 20);
    }

    #[test]
    fn full_allowance_accepts_any_overlap() {
        let variation = VariationParams::try_new(0, 0, 100).unwrap();
        let input = input((100, 100), &[(10, 10)], variation);
        let blocker = (
            Footprint {
                width: 100.0,
                height: 100.0,
            },
            Point(50.0, 50.0),
        );
        let config = SearchConfig::default();
        let sampler = TransformSampler::new(&input.variation, config.min_scale_multiplier).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let mut n_samples = 0;

        let placement =
            search(0, &input, &[blocker], &sampler, &config, &mut rng, &mut n_samples).unwrap();
        assert_eq!(placement.status, PlacementStatus::Accepted);
    }

    #[test]
    fn placement_order_is_a_permutation() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        assert_eq!(placement_order(4, false, &mut rng), vec![0, 1, 2, 3]);

        let shuffled = placement_order(50, true, &mut rng);
        assert_eq!(shuffled.iter().copied().sorted().collect_vec(), (0..50).collect_vec());
    }
}
