use anyhow::Result;
use rand::Rng;

use hero_scatter::entities::VariationParams;

use crate::samplers::rotation_distr::UniformRotDistr;
use crate::samplers::scale_distr::ScaleMultiplierDistr;

/// Samples the scale multiplier and rotation of a candidate, in that order.
#[derive(Clone, Debug)]
pub struct TransformSampler {
    pub scale_distr: ScaleMultiplierDistr,
    pub rot_distr: UniformRotDistr,
}

impl TransformSampler {
    pub fn new(variation: &VariationParams, min_scale_multiplier: f64) -> Result<Self> {
        Ok(Self {
            scale_distr: ScaleMultiplierDistr::from_variation(variation, min_scale_multiplier)?,
            rot_distr: UniformRotDistr::from_variation(variation)?,
        })
    }

    /// Returns `(scale multiplier, rotation in degrees)`
    pub fn sample(&self, rng: &mut impl Rng) -> (f64, f64) {
        let multiplier = self.scale_distr.sample(rng);
        let rotation = self.rot_distr.sample(rng);
        (multiplier, rotation)
    }
}
