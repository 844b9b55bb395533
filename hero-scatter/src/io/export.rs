use std::time::Instant;

use crate::entities::{PlanInput, Placement, PlacementStatus, RelaxReason, ScatterSolution};
use crate::io::ext_repr::{ExtPlacement, ExtPlacementStatus, ExtSolution};

/// Exports a solution out of the library
pub fn export(input: &PlanInput, solution: &ScatterSolution, epoch: Instant) -> ExtSolution {
    ExtSolution {
        placements: solution
            .placements
            .iter()
            .map(|p| export_placement(input, p))
            .collect(),
        n_relaxed: solution.n_relaxed(),
        n_samples: solution.n_samples,
        density: solution.density(input),
        run_time_sec: solution.time_stamp.saturating_duration_since(epoch).as_secs(),
    }
}

pub fn export_placement(input: &PlanInput, placement: &Placement) -> ExtPlacement {
    let footprint = placement.footprint(&input.sprites[placement.sprite_id]);
    ExtPlacement {
        sprite_id: placement.sprite_id,
        center: placement.center.into(),
        scale: placement.scale,
        rotation: placement.rotation,
        bbox: (footprint.width, footprint.height),
        status: match placement.status {
            PlacementStatus::Accepted => ExtPlacementStatus::Accepted,
            PlacementStatus::Relaxed(RelaxReason::Overlap) => ExtPlacementStatus::RelaxedOverlap,
            PlacementStatus::Relaxed(RelaxReason::Containment) => {
                ExtPlacementStatus::RelaxedContainment
            }
        },
    }
}
