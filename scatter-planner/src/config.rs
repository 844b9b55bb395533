use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use hero_scatter::entities::VariationParams;
use hero_scatter::io::svg::SvgDrawOptions;

/// Configuration of a planning run from the command line
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Seed for the PRNG. If undefined, the planner will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Bounds of the random variation applied to every sprite
    #[serde(default)]
    pub variation: VariationParams,
    /// Budgets and heuristics of the search
    #[serde(default)]
    pub search: SearchConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            variation: VariationParams::default(),
            search: SearchConfig::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

impl PlannerConfig {
    pub fn validate(&self) -> Result<()> {
        self.variation.validate()?;
        self.search.validate()
    }
}

/// Budgets and heuristics of the per-sprite search
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of candidates (scale, rotation and position) sampled per sprite
    pub n_attempts_per_sprite: usize,
    /// Maximum number of positions sampled per candidate to get it inside the canvas
    pub n_position_attempts: usize,
    /// Fraction of the canvas the sprites together aim to cover, determines the baseline scale
    pub fill_fraction: f64,
    /// Lower bound of the random scale multiplier
    pub min_scale_multiplier: f64,
    /// Decide the placement priority in random order instead of input order
    pub shuffle_placement_order: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            n_attempts_per_sprite: 100,
            n_position_attempts: 10,
            fill_fraction: 0.6,
            min_scale_multiplier: 0.2,
            shuffle_placement_order: false,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.n_attempts_per_sprite > 0,
            "n_attempts_per_sprite must be positive"
        );
        ensure!(
            self.n_position_attempts > 0,
            "n_position_attempts must be positive"
        );
        ensure!(
            self.fill_fraction > 0.0 && self.fill_fraction <= 1.0,
            "fill_fraction must be in (0, 1], got {}",
            self.fill_fraction
        );
        ensure!(
            self.min_scale_multiplier > 0.0 && self.min_scale_multiplier <= 1.0,
            "min_scale_multiplier must be in (0, 1], got {}",
            self.min_scale_multiplier
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PlannerConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_config_file_falls_back_to_defaults() {
        let json = r#"{
            "prng_seed": 42,
            "variation": {"size_variation": 3},
            "search": {"n_attempts_per_sprite": 20}
        }"#;
        let config: PlannerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.prng_seed, Some(42));
        assert_eq!(config.variation.size_variation, 3);
        assert_eq!(config.variation.overlap_allowance, 0);
        assert_eq!(config.search.n_attempts_per_sprite, 20);
        assert_eq!(config.search.n_position_attempts, 10);
        assert!(!config.search.shuffle_placement_order);
    }

    #[test]
    fn missing_seed_means_entropy() {
        let config: PlannerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.prng_seed, None);
    }

    #[test]
    fn zero_budgets_are_rejected() {
        let search = SearchConfig {
            n_attempts_per_sprite: 0,
            ..SearchConfig::default()
        };
        assert!(search.validate().is_err());

        let search = SearchConfig {
            fill_fraction: 0.0,
            ..SearchConfig::default()
        };
        assert!(search.validate().is_err());
    }
}
