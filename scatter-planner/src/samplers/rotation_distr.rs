use anyhow::Result;
use rand::Rng;
use rand::distr::{Distribution, Uniform};

use hero_scatter::entities::VariationParams;

/// Samples rotations in degrees, uniformly within `[-orientation_variation, orientation_variation]`.
#[derive(Clone, Debug)]
pub enum UniformRotDistr {
    /// No rotation allowed, nothing is drawn
    None,
    Range(Uniform<f64>),
}

impl UniformRotDistr {
    pub fn from_variation(variation: &VariationParams) -> Result<Self> {
        match variation.orientation_variation {
            0 => Ok(UniformRotDistr::None),
            max => {
                let max = max as f64;
                Ok(UniformRotDistr::Range(Uniform::new_inclusive(-max, max)?))
            }
        }
    }

    pub fn sample(&self, rng: &mut impl Rng) -> f64 {
        match self {
            UniformRotDistr::None => 0.0,
            UniformRotDistr::Range(u) => u.sample(rng),
        }
    }
}
