use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};

use hero_scatter::io::export::export;
use hero_scatter::io::import::import;
use hero_scatter::io::svg::layout_to_svg;
use scatter_planner::config::PlannerConfig;
use scatter_planner::io::cli::Cli;
use scatter_planner::io::output::ScatterOutput;
use scatter_planner::opt::plan_with;
use scatter_planner::{EPOCH, io};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PlannerConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file).with_context(|| {
                format!("could not open config file: {}", config_file.display())
            })?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    args.override_config(&mut config)?;

    if config.prng_seed.is_none() {
        //draw the seed here so it ends up in the solution file
        let seed = rand::random::<u64>();
        info!("[MAIN] no seed provided, drew {seed} from entropy");
        config.prng_seed = Some(seed);
    }

    info!("[MAIN] Successfully parsed PlannerConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!(
                "could not create output folder: {}",
                args.output_folder.display()
            )
        })?;
    }

    let mut ext_instance = io::read_instance(&args.input_file)?;
    args.override_instance(&mut ext_instance);

    let input = import(&ext_instance, config.variation, config.prng_seed)?;
    let solution = plan_with(&input, &config.search)?;

    if solution.n_relaxed() > 0 {
        warn!(
            "[MAIN] {} sprite(s) violate a constraint: {:?}, consider a larger overlap allowance or less size variation",
            solution.n_relaxed(),
            solution.relaxed_ids()
        );
    }

    {
        let output = ScatterOutput {
            instance: ext_instance.clone(),
            solution: export(&input, &solution, *EPOCH),
            config,
        };
        let solution_path = args.output_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, &solution_path)?;
    }

    {
        let svg_path = args.output_folder.join(format!("sol_{input_stem}.svg"));
        let svg = layout_to_svg(
            &input,
            &solution.placements,
            config.svg_draw_options,
            &ext_instance.name,
        );
        io::write_svg(&svg, &svg_path)?;
    }

    Ok(())
}
