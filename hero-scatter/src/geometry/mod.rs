mod footprint;

/// Enums for geometric relations between primitives
pub mod geo_enums;

/// Traits for geometric primitives
pub mod geo_traits;

/// Basic geometric primitives
pub mod primitives;

#[doc(inline)]
pub use footprint::Footprint;
#[doc(inline)]
pub use footprint::fits_within_canvas;
#[doc(inline)]
pub use footprint::overlap_ratio;
#[doc(inline)]
pub use footprint::rotated_footprint;
