use anyhow::{Context, Result, ensure};

use crate::entities::{CanvasSpec, PlanInput, SpriteSize, VariationParams};
use crate::io::ext_repr::ExtInstance;

/// Imports an instance into the library, combined with the variation and seed of the run.
pub fn import(
    ext_instance: &ExtInstance,
    variation: VariationParams,
    seed: Option<u64>,
) -> Result<PlanInput> {
    let canvas = CanvasSpec::try_new(ext_instance.canvas.width, ext_instance.canvas.height)?;

    let sprites = ext_instance
        .sprites
        .iter()
        .enumerate()
        .map(|(i, ext_sprite)| {
            ensure!(
                ext_sprite.id == i,
                "sprite ids should be equal to their position, expected {i}, found {}",
                ext_sprite.id
            );
            SpriteSize::try_new(ext_sprite.width, ext_sprite.height)
                .with_context(|| format!("could not import sprite {}", ext_sprite.id))
        })
        .collect::<Result<Vec<_>>>()?;

    let input = PlanInput::new(canvas, sprites, variation, seed);
    input.validate()?;
    Ok(input)
}
