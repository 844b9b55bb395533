use serde::{Deserialize, Serialize};

/// External representation of a hero image to be composed
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    pub canvas: ExtCanvas,
    /// The sprites to scatter, in placement priority order
    pub sprites: Vec<ExtSprite>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtCanvas {
    pub width: u32,
    pub height: u32,
}

/// External representation of a sprite, i.e. a background-stripped input image
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSprite {
    /// Unique identifier of the sprite, equal to its position in the list
    pub id: usize,
    /// Typically the file the sprite was extracted from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Natural width in pixels
    pub width: u32,
    /// Natural height in pixels
    pub height: u32,
}

/// External representation of a solution
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// One placement per sprite, in sprite order
    pub placements: Vec<ExtPlacement>,
    /// Number of placements violating a constraint
    pub n_relaxed: usize,
    /// Number of candidate placements evaluated
    pub n_samples: usize,
    /// Sum of the bounding box areas divided by the canvas area
    pub density: f64,
    /// The time it took to generate the solution in seconds
    pub run_time_sec: u64,
}

/// External representation of a placement
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacement {
    pub sprite_id: usize,
    /// Center of the sprite on the canvas
    pub center: (f64, f64),
    /// Scale relative to the natural size
    pub scale: f64,
    /// Rotation in degrees
    pub rotation: f64,
    /// Width and height of the axis-aligned bounding box
    pub bbox: (f64, f64),
    pub status: ExtPlacementStatus,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtPlacementStatus {
    Accepted,
    RelaxedOverlap,
    RelaxedContainment,
}
