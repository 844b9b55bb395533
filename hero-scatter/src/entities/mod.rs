mod canvas;
mod placement;
mod plan_input;
mod solution;
mod sprite;
mod variation;

#[doc(inline)]
pub use canvas::CanvasSpec;
#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use placement::PlacementStatus;
#[doc(inline)]
pub use placement::RelaxReason;
#[doc(inline)]
pub use plan_input::PlanInput;
#[doc(inline)]
pub use solution::ScatterSolution;
#[doc(inline)]
pub use sprite::SpriteSize;
#[doc(inline)]
pub use variation::VariationParams;
