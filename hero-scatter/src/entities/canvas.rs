use std::fmt::Display;

use anyhow::{Result, ensure};

use crate::geometry::primitives::{Point, Rect};

/// The target canvas of the hero image, in pixels.
/// Spans `[0, width] x [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
}

impl CanvasSpec {
    pub fn try_new(width: u32, height: u32) -> Result<Self> {
        let canvas = CanvasSpec { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width > 0 && self.height > 0,
            "invalid canvas, width: {}, height: {}",
            self.width,
            self.height
        );
        Ok(())
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.width as f64,
            y_max: self.height as f64,
        }
    }

    pub fn center(&self) -> Point {
        Point(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    pub fn area(&self) -> f64 {
        self.width as f64 * self.height as f64
    }
}

impl Display for CanvasSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
