use std::fmt::Display;

use anyhow::{Result, ensure};

/// Natural pixel dimensions of a sprite (a background-stripped input image),
/// before any scaling or rotation is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteSize {
    pub width: u32,
    pub height: u32,
}

impl SpriteSize {
    pub fn try_new(width: u32, height: u32) -> Result<Self> {
        let size = SpriteSize { width, height };
        size.validate()?;
        Ok(size)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width > 0 && self.height > 0,
            "invalid sprite size, width: {}, height: {}",
            self.width,
            self.height
        );
        Ok(())
    }

    /// Length of the longest side
    pub fn max_side(&self) -> f64 {
        u32::max(self.width, self.height) as f64
    }
}

impl Display for SpriteSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
