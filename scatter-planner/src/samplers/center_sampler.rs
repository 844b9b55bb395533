use anyhow::Result;
use rand::Rng;
use rand::distr::{Distribution, Uniform};

use hero_scatter::entities::CanvasSpec;
use hero_scatter::geometry::Footprint;
use hero_scatter::geometry::primitives::Point;

/// Samples centers uniformly over the region where a footprint lies entirely within the canvas.
///
/// On an axis where the footprint is exactly as large as the canvas, the center is fixed and nothing is drawn.
/// On an axis where the footprint is larger than the canvas, the center is clamped to the middle
/// of the canvas and the sampler is *forced*: none of its samples can fit.
#[derive(Clone, Debug)]
pub struct UniformCenterSampler {
    x: AxisDistr,
    y: AxisDistr,
    forced: bool,
}

#[derive(Clone, Debug)]
enum AxisDistr {
    Fixed(f64),
    Range(Uniform<f64>),
}

impl AxisDistr {
    fn new(size: f64, extent: f64) -> Result<Self> {
        let (low, high) = (size / 2.0, extent - size / 2.0);
        if low < high {
            Ok(AxisDistr::Range(Uniform::new_inclusive(low, high)?))
        } else {
            Ok(AxisDistr::Fixed(extent / 2.0))
        }
    }

    fn sample(&self, rng: &mut impl Rng) -> f64 {
        match self {
            AxisDistr::Fixed(c) => *c,
            AxisDistr::Range(u) => u.sample(rng),
        }
    }
}

impl UniformCenterSampler {
    pub fn new(footprint: Footprint, canvas: &CanvasSpec) -> Result<Self> {
        let (width, height) = (canvas.width as f64, canvas.height as f64);
        Ok(Self {
            x: AxisDistr::new(footprint.width, width)?,
            y: AxisDistr::new(footprint.height, height)?,
            forced: footprint.width > width || footprint.height > height,
        })
    }

    /// Whether the footprint exceeds the canvas on at least one axis
    pub fn is_forced(&self) -> bool {
        self.forced
    }

    pub fn sample(&self, rng: &mut impl Rng) -> Point {
        let x = self.x.sample(rng);
        let y = self.y.sample(rng);
        Point(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hero_scatter::geometry::fits_within_canvas;
    use rand::{RngCore, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    const CANVAS: CanvasSpec = CanvasSpec {
        width: 1440,
        height: 720,
    };

    #[test]
    fn samples_fit_within_canvas() {
        let footprint = Footprint {
            width: 300.0,
            height: 200.0,
        };
        let sampler = UniformCenterSampler::new(footprint, &CANVAS).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);

        assert!(!sampler.is_forced());
        for _ in 0..1000 {
            let center = sampler.sample(&mut rng);
            assert!(fits_within_canvas(footprint, center, &CANVAS));
        }
    }

    #[test]
    fn oversized_axis_is_forced_to_the_middle() {
        let footprint = Footprint {
            width: 100.0,
            height: 800.0,
        };
        let sampler = UniformCenterSampler::new(footprint, &CANVAS).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);

        assert!(sampler.is_forced());
        let center = sampler.sample(&mut rng);
        assert_eq!(center.y(), 360.0);
        assert!(!fits_within_canvas(footprint, center, &CANVAS));
    }

    #[test]
    fn flush_footprint_is_fixed_and_draws_nothing() {
        let footprint = Footprint {
            width: 1440.0,
            height: 720.0,
        };
        let sampler = UniformCenterSampler::new(footprint, &CANVAS).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        let mut reference = rng.clone();

        assert!(!sampler.is_forced());
        let center = sampler.sample(&mut rng);
        assert_eq!(center, Point(720.0, 360.0));
        assert!(fits_within_canvas(footprint, center, &CANVAS));
        assert_eq!(rng.next_u64(), reference.next_u64());
    }
}
