//!
//! Geometry engine and layout model for scattering sprites onto a hero image canvas.
//!
//! The crate evaluates candidate placements of rectangular sprites (scaled, rotated and
//! translated) and measures how they relate to the canvas and to each other.
//! Searching for good placements is left to an optimizer built on top, such as `scatter-planner`.
//!

/// Everything related to the geometric evaluation of sprite placements
pub mod geometry;

/// Entities to model the scatter problem: canvas, sprites, placements, solutions
pub mod entities;

/// Importing problem instances and exporting solutions into/out of the library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
