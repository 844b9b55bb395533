use std::time::Instant;

use itertools::Itertools;

use crate::entities::{PlanInput, Placement};

/// Outcome of a planning run: exactly one [`Placement`] per input sprite, in input order.
#[derive(Debug, Clone)]
pub struct ScatterSolution {
    pub placements: Vec<Placement>,
    /// Total number of candidate placements evaluated
    pub n_samples: usize,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl ScatterSolution {
    pub fn new(placements: Vec<Placement>, n_samples: usize) -> Self {
        Self {
            placements,
            n_samples,
            time_stamp: Instant::now(),
        }
    }

    /// Ids of the sprites whose placement had to be relaxed
    pub fn relaxed_ids(&self) -> Vec<usize> {
        self.placements
            .iter()
            .filter(|p| p.is_relaxed())
            .map(|p| p.sprite_id)
            .collect_vec()
    }

    pub fn n_relaxed(&self) -> usize {
        self.placements.iter().filter(|p| p.is_relaxed()).count()
    }

    /// Sum of the bounding box areas of all placements divided by the area of the canvas.
    /// Overlapping regions are counted multiple times.
    pub fn density(&self, input: &PlanInput) -> f64 {
        let covered = self
            .placements
            .iter()
            .map(|p| p.footprint(&input.sprites[p.sprite_id]).area())
            .sum::<f64>();
        covered / input.canvas.area()
    }
}
