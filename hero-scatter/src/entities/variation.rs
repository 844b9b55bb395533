use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Bounds the randomized search space shared by every sprite of a hero image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VariationParams {
    /// Spread of the random scale perturbation, in tenths: `[0, 10]`.
    /// A sprite's scale multiplier is drawn from `1 ± size_variation / 10`.
    #[serde(default)]
    pub size_variation: u32,
    /// Maximum absolute rotation in degrees: `[0, 90]`
    #[serde(default)]
    pub orientation_variation: u32,
    /// Maximum overlap between two sprites, as a percentage of the smaller one's bounding box: `[0, 100]`
    #[serde(default)]
    pub overlap_allowance: u32,
}

impl VariationParams {
    pub const MAX_SIZE_VARIATION: u32 = 10;
    pub const MAX_ORIENTATION_VARIATION: u32 = 90;
    pub const MAX_OVERLAP_ALLOWANCE: u32 = 100;

    pub fn try_new(
        size_variation: u32,
        orientation_variation: u32,
        overlap_allowance: u32,
    ) -> Result<Self> {
        let params = VariationParams {
            size_variation,
            orientation_variation,
            overlap_allowance,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.size_variation <= Self::MAX_SIZE_VARIATION,
            "size variation must be in [0, {}], got {}",
            Self::MAX_SIZE_VARIATION,
            self.size_variation
        );
        ensure!(
            self.orientation_variation <= Self::MAX_ORIENTATION_VARIATION,
            "orientation variation must be in [0, {}] degrees, got {}",
            Self::MAX_ORIENTATION_VARIATION,
            self.orientation_variation
        );
        ensure!(
            self.overlap_allowance <= Self::MAX_OVERLAP_ALLOWANCE,
            "overlap allowance must be in [0, {}] percent, got {}",
            Self::MAX_OVERLAP_ALLOWANCE,
            self.overlap_allowance
        );
        Ok(())
    }

    /// The overlap allowance as a fraction in `[0, 1]`, comparable with [`overlap_ratio`](crate::geometry::overlap_ratio).
    pub fn max_overlap_ratio(&self) -> f64 {
        self.overlap_allowance as f64 / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 0, 0; "all zero")]
    #[test_case(10, 90, 100; "all maxed")]
    #[test_case(3, 25, 20; "typical")]
    fn valid_params(s: u32, o: u32, l: u32) {
        assert!(VariationParams::try_new(s, o, l).is_ok());
    }

    #[test_case(11, 0, 0; "size too large")]
    #[test_case(0, 91, 0; "orientation too large")]
    #[test_case(0, 0, 101; "overlap too large")]
    fn invalid_params(s: u32, o: u32, l: u32) {
        assert!(VariationParams::try_new(s, o, l).is_err());
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let params: VariationParams = serde_json::from_str(r#"{"overlap_allowance": 20}"#).unwrap();
        assert_eq!(params, VariationParams::try_new(0, 0, 20).unwrap());
        assert_eq!(params.max_overlap_ratio(), 0.2);
    }
}
