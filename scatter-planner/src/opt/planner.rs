use std::time::Instant;

use anyhow::Result;
use itertools::Itertools;
use log::{info, warn};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use thousands::Separable;

use hero_scatter::entities::{PlanInput, Placement, PlacementStatus, ScatterSolution};
use hero_scatter::geometry::Footprint;
use hero_scatter::geometry::primitives::Point;
use hero_scatter::util::assertions;

use crate::config::SearchConfig;
use crate::opt::search::{placement_order, search};
use crate::samplers::transform_sampler::TransformSampler;

/// Randomized scatter planner, places the sprites one by one in priority order.
/// Every sprite samples candidates until one fits the canvas and respects the overlap allowance
/// towards all earlier placements, or its attempt budget runs out and the constraint is relaxed.
pub struct ScatterPlanner {
    pub input: PlanInput,
    pub config: SearchConfig,
    /// Xoshiro256++ is a fast, portable, non-cryptographic PRNG: the same seed yields the same plan on every platform
    pub rng: Xoshiro256PlusPlus,
    pub sample_counter: usize,
}

impl ScatterPlanner {
    pub fn new(input: PlanInput, config: SearchConfig, rng: Xoshiro256PlusPlus) -> Result<Self> {
        input.validate()?;
        config.validate()?;
        Ok(Self {
            input,
            config,
            rng,
            sample_counter: 0,
        })
    }

    pub fn solve(&mut self) -> Result<ScatterSolution> {
        let start = Instant::now();
        let n_sprites = self.input.sprites.len();

        if n_sprites == 0 {
            info!("[PLAN] no sprites to place");
            return Ok(ScatterSolution::new(vec![], 0));
        }

        let sampler = TransformSampler::new(&self.input.variation, self.config.min_scale_multiplier)?;
        let order = placement_order(
            n_sprites,
            self.config.shuffle_placement_order,
            &mut self.rng,
        );

        let mut placements: Vec<Option<Placement>> = vec![None; n_sprites];
        //bounding boxes of all earlier placements, relaxed ones included
        let mut placed: Vec<(Footprint, Point)> = Vec::with_capacity(n_sprites);

        for (i, sprite_id) in order.into_iter().enumerate() {
            let placement = search(
                sprite_id,
                &self.input,
                &placed,
                &sampler,
                &self.config,
                &mut self.rng,
                &mut self.sample_counter,
            )?;
            match placement.status {
                PlacementStatus::Accepted => info!(
                    "[PLAN] placing sprite {}/{} with id {} at [{}]",
                    i + 1,
                    n_sprites,
                    sprite_id,
                    placement
                ),
                PlacementStatus::Relaxed(reason) => warn!(
                    "[PLAN] no valid placement for sprite {} within {} attempts, relaxed {:?} constraint at [{}]",
                    sprite_id, self.config.n_attempts_per_sprite, reason, placement
                ),
            }
            placed.push((
                placement.footprint(&self.input.sprites[sprite_id]),
                placement.center,
            ));
            placements[sprite_id] = Some(placement);
        }

        let solution = ScatterSolution::new(
            placements.into_iter().flatten().collect_vec(),
            self.sample_counter,
        );

        debug_assert!(assertions::solution_matches_input(&self.input, &solution));
        debug_assert!(assertions::accepted_placements_within_canvas(
            &self.input,
            &solution.placements
        ));
        debug_assert!(assertions::accepted_placements_respect_overlap(
            &self.input,
            &solution.placements
        ));

        info!(
            "[PLAN] planning finished in {:.3}ms ({} samples)",
            start.elapsed().as_secs_f64() * 1000.0,
            self.sample_counter.separate_with_commas()
        );
        info!(
            "[PLAN] {} sprites placed with a density of {:.3}%, {} relaxed",
            solution.placements.len(),
            solution.density(&self.input) * 100.0,
            solution.n_relaxed()
        );

        Ok(solution)
    }
}

/// Plans the placement of every sprite of `input` with the default [`SearchConfig`].
pub fn plan(input: &PlanInput) -> Result<ScatterSolution> {
    plan_with(input, &SearchConfig::default())
}

/// Plans the placement of every sprite of `input`.
/// Each call owns its own PRNG, seeded from `input.seed` or, if undefined, from entropy.
pub fn plan_with(input: &PlanInput, config: &SearchConfig) -> Result<ScatterSolution> {
    let seed = match input.seed {
        Some(seed) => seed,
        None => {
            let seed = rand::random::<u64>();
            info!("[PLAN] no seed provided, drew {seed} from entropy");
            seed
        }
    };
    let rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    ScatterPlanner::new(input.clone(), *config, rng)?.solve()
}
