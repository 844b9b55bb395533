use itertools::Itertools;
use log::error;

use crate::entities::{PlanInput, Placement, ScatterSolution};
use crate::geometry::{fits_within_canvas, overlap_ratio};

//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

/// Every sprite has exactly one placement and the placements are in input order.
pub fn solution_matches_input(input: &PlanInput, solution: &ScatterSolution) -> bool {
    solution.placements.len() == input.sprites.len()
        && solution
            .placements
            .iter()
            .enumerate()
            .all(|(i, p)| p.sprite_id == i)
}

/// Every non-relaxed placement lies within the canvas.
pub fn accepted_placements_within_canvas(input: &PlanInput, placements: &[Placement]) -> bool {
    placements.iter().filter(|p| !p.is_relaxed()).all(|p| {
        let footprint = p.footprint(&input.sprites[p.sprite_id]);
        let fits = fits_within_canvas(footprint, p.center, &input.canvas);
        if !fits {
            error!(
                "sprite {} is not relaxed but exceeds the canvas: {}",
                p.sprite_id, p
            );
        }
        fits
    })
}

/// No two non-relaxed placements overlap more than the allowance.
pub fn accepted_placements_respect_overlap(input: &PlanInput, placements: &[Placement]) -> bool {
    let max_ratio = input.variation.max_overlap_ratio();
    placements
        .iter()
        .filter(|p| !p.is_relaxed())
        .tuple_combinations()
        .all(|(a, b)| {
            let ratio = overlap_ratio(
                a.footprint(&input.sprites[a.sprite_id]),
                a.center,
                b.footprint(&input.sprites[b.sprite_id]),
                b.center,
            );
            if ratio > max_ratio {
                error!(
                    "sprites {} and {} overlap {:.3}%, allowed: {}%",
                    a.sprite_id,
                    b.sprite_id,
                    ratio * 100.0,
                    input.variation.overlap_allowance
                );
            }
            ratio <= max_ratio
        })
}
