use anyhow::Result;
use rand::Rng;
use rand::distr::{Distribution, Uniform};

use hero_scatter::entities::VariationParams;

/// Samples the random multiplier applied to the baseline scale of a sprite.
/// Uniform within `1 ± size_variation / 10`, with the lower bound clamped to a positive minimum.
#[derive(Clone, Debug)]
pub enum ScaleMultiplierDistr {
    /// No size variation, the multiplier is always 1 and nothing is drawn
    Fixed,
    Range(Uniform<f64>),
}

impl ScaleMultiplierDistr {
    pub fn from_variation(variation: &VariationParams, min_multiplier: f64) -> Result<Self> {
        match variation.size_variation {
            0 => Ok(ScaleMultiplierDistr::Fixed),
            sv => {
                let spread = sv as f64 / 10.0;
                let low = f64::max(1.0 - spread, min_multiplier);
                let high = 1.0 + spread;
                Ok(ScaleMultiplierDistr::Range(Uniform::new_inclusive(
                    low, high,
                )?))
            }
        }
    }

    pub fn sample(&self, rng: &mut impl Rng) -> f64 {
        match self {
            ScaleMultiplierDistr::Fixed => 1.0,
            ScaleMultiplierDistr::Range(u) => u.sample(rng),
        }
    }
}
