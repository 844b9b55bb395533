use std::fmt::Display;

use crate::entities::SpriteSize;
use crate::geometry::primitives::Point;
use crate::geometry::{Footprint, rotated_footprint};

/// Where and how a single sprite is drawn onto the canvas.
/// The sprite is scaled by `scale`, rotated by `rotation` degrees about its center and
/// centered at `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Index of the sprite in the input sequence
    pub sprite_id: usize,
    /// Center of the sprite in canvas coordinates
    pub center: Point,
    /// Scale relative to the natural size of the sprite
    pub scale: f64,
    /// Rotation in degrees about the center.
    /// The canvas y-axis points down, so positive angles turn clockwise on screen.
    pub rotation: f64,
    pub status: PlacementStatus,
}

impl Placement {
    /// Axis-aligned bounding box of the sprite under this placement.
    /// Derived on demand, never stored.
    pub fn footprint(&self, size: &SpriteSize) -> Footprint {
        rotated_footprint(size, self.scale, self.rotation)
    }

    pub fn is_relaxed(&self) -> bool {
        matches!(self.status, PlacementStatus::Relaxed(_))
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "s: {:.3}, r: {:.3}°, c: {} [{}]",
            self.scale, self.rotation, self.center, self.status
        )
    }
}

/// Outcome of the search for a sprite's placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlacementStatus {
    /// Satisfies both the containment and the overlap constraint
    Accepted,
    /// Best-effort placement after the attempt budget was exhausted, violating a constraint
    Relaxed(RelaxReason),
}

/// The constraint a relaxed placement violates.
/// When both are violated, [`RelaxReason::Containment`] is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelaxReason {
    /// Overlaps an earlier placement beyond the allowance
    Overlap,
    /// Bounding box extends beyond the canvas
    Containment,
}

impl Display for PlacementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementStatus::Accepted => write!(f, "accepted"),
            PlacementStatus::Relaxed(RelaxReason::Overlap) => write!(f, "relaxed: overlap"),
            PlacementStatus::Relaxed(RelaxReason::Containment) => {
                write!(f, "relaxed: containment")
            }
        }
    }
}
