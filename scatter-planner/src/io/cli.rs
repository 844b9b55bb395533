use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use hero_scatter::io::ext_repr::{ExtCanvas, ExtInstance};

use crate::config::PlannerConfig;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub output_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Spread of the random scale, in tenths (overrides the config)
    #[arg(short, long, value_name = "0..=10")]
    pub size_variation: Option<u32>,
    /// Maximum absolute rotation in degrees (overrides the config)
    #[arg(short = 'r', long, value_name = "0..=90")]
    pub orientation_variation: Option<u32>,
    /// Maximum overlap between two sprites, in percent of the smaller one (overrides the config)
    #[arg(short = 'l', long, value_name = "0..=100")]
    pub overlap: Option<u32>,
    /// Seed for the PRNG (overrides the config)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Size of the canvas (overrides the instance)
    #[arg(long, value_name = "WxH", value_parser = parse_dimensions)]
    pub canvas: Option<(u32, u32)>,
}

impl Cli {
    /// Applies the command line overrides to the config, validating the result
    pub fn override_config(&self, config: &mut PlannerConfig) -> Result<()> {
        if let Some(sv) = self.size_variation {
            config.variation.size_variation = sv;
        }
        if let Some(ov) = self.orientation_variation {
            config.variation.orientation_variation = ov;
        }
        if let Some(overlap) = self.overlap {
            config.variation.overlap_allowance = overlap;
        }
        if let Some(seed) = self.seed {
            config.prng_seed = Some(seed);
        }
        config.validate()
    }

    /// Applies the command line overrides to the instance
    pub fn override_instance(&self, ext_instance: &mut ExtInstance) {
        if let Some((width, height)) = self.canvas {
            ext_instance.canvas = ExtCanvas { width, height };
        }
    }
}

/// Parses dimensions formatted as `WIDTHxHEIGHT`, e.g. `1440x720`
pub fn parse_dimensions(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid dimension {v:?} in {s}: {e}"))
    };
    let (w, h) = (parse(w)?, parse(h)?);
    if w == 0 || h == 0 {
        return Err(format!("dimensions must be positive, got {s}"));
    }
    Ok((w, h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1440x720", Some((1440, 720)); "lowercase")]
    #[test_case("800X600", Some((800, 600)); "uppercase")]
    #[test_case("1440", None; "missing height")]
    #[test_case("0x720", None; "zero width")]
    #[test_case("-5x720", None; "negative")]
    #[test_case("axb", None; "not a number")]
    fn dimensions(s: &str, expected: Option<(u32, u32)>) {
        assert_eq!(parse_dimensions(s).ok(), expected);
    }

    #[test]
    fn overrides_are_applied_and_validated() {
        let cli = Cli::parse_from([
            "scatter-planner",
            "-i",
            "instance.json",
            "-o",
            "out",
            "-s",
            "3",
            "-r",
            "20",
            "--overlap",
            "15",
            "--seed",
            "7",
        ]);
        let mut config = PlannerConfig::default();
        cli.override_config(&mut config).unwrap();
        assert_eq!(config.variation.size_variation, 3);
        assert_eq!(config.variation.orientation_variation, 20);
        assert_eq!(config.variation.overlap_allowance, 15);
        assert_eq!(config.prng_seed, Some(7));

        let cli = Cli::parse_from(["scatter-planner", "-i", "a.json", "-o", "out", "-r", "91"]);
        assert!(cli.override_config(&mut PlannerConfig::default()).is_err());
    }
}
