use ordered_float::NotNan;

/// The loss assigned to a candidate placement that violates a constraint.
/// Candidates within the canvas always beat candidates exceeding it.
/// Ties are broken by the largest overlap ratio with any earlier placement.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug, Eq, Ord)]
pub struct CandidateLoss {
    pub exceeds_canvas: bool,
    pub max_overlap: NotNan<f64>,
}

impl CandidateLoss {
    pub fn new(exceeds_canvas: bool, max_overlap: f64) -> Self {
        CandidateLoss {
            exceeds_canvas,
            max_overlap: NotNan::new(max_overlap).expect("overlap ratio is NaN"),
        }
    }
}
