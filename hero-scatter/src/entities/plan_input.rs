use anyhow::{Context, Result};

use crate::entities::{CanvasSpec, SpriteSize, VariationParams};

/// Everything a single planning run depends on, gathered in one immutable value.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanInput {
    pub canvas: CanvasSpec,
    /// Natural sizes of the sprites, in placement priority order
    pub sprites: Vec<SpriteSize>,
    pub variation: VariationParams,
    /// Seed for the PRNG. If undefined, the planner seeds itself from entropy
    pub seed: Option<u64>,
}

impl PlanInput {
    pub fn new(
        canvas: CanvasSpec,
        sprites: Vec<SpriteSize>,
        variation: VariationParams,
        seed: Option<u64>,
    ) -> Self {
        Self {
            canvas,
            sprites,
            variation,
            seed,
        }
    }

    /// Checks the structural validity of every part of the input.
    pub fn validate(&self) -> Result<()> {
        self.canvas.validate()?;
        self.variation.validate()?;
        for (i, sprite) in self.sprites.iter().enumerate() {
            sprite.validate().with_context(|| format!("sprite {i}"))?;
        }
        Ok(())
    }
}
