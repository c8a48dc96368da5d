#![warn(non_snake_case)]
//! # maze_gen Entry Point
//!
//! Grows one connected tile layout and prints it. The layout is built on an
//! in-memory [`ConnectorScene`], where every piece reaches into the
//! neighbouring slots it opens onto.
//!
//! ```text
//! maze_gen [config.json] [--view] [--seed N]
//! ```
//!
//! Without a config file the default 10x10 catalog is used. `RUST_LOG`
//! controls log output (`RUST_LOG=debug` traces every placement). `--view`
//! opens a window instead of printing and needs the `gui` feature.
//!
//! ## License
//! Licensed under the MIT License.

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::path::PathBuf;

use maze_gen::render::render_layout;
use maze_gen::{generate, ConnectorScene, GenerationReport, GeneratorConfig};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON generator config; the default 10x10 catalog is used when omitted.
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Open a window instead of printing (needs the `gui` feature).
    #[arg(long)]
    view: bool,

    /// Overrides the seed from the config file.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn run<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<GenerationReport, Box<dyn Error>> {
    let mut scene = ConnectorScene::new(config.spacing);
    let report = generate(config, &mut scene, rng)?;
    Ok(report)
}

fn print_report(report: &GenerationReport) {
    print!("{}", render_layout(report));
    println!(
        "{} of {} cells filled",
        report.filled_count(),
        report.columns * report.rows
    );
    for issue in &report.issues {
        println!("piece #{} at {}: {}", issue.order, issue.pos, issue.error);
    }
}

#[cfg(feature = "gui")]
fn show(report: GenerationReport) -> Result<(), Box<dyn Error>> {
    maze_gen::render::viewer::run_viewer(report)
}

#[cfg(not(feature = "gui"))]
fn show(report: GenerationReport) -> Result<(), Box<dyn Error>> {
    log::warn!("--view needs the `gui` feature; printing instead");
    print_report(&report);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    info!("maze_gen starting...");

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            GeneratorConfig::load(path)?
        }
        None => GeneratorConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let report = match config.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            run(&config, &mut StdRng::seed_from_u64(seed))?
        }
        None => run(&config, &mut rand::rng())?,
    };

    if args.view {
        show(report)?;
    } else {
        print_report(&report);
    }

    info!("maze_gen exiting.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let args = Args::try_parse_from(["maze_gen"]).unwrap();
        assert!(args.config.is_none());
        assert!(!args.view);
        assert!(args.seed.is_none());
    }

    #[test]
    fn test_config_path_and_flags() {
        let args =
            Args::try_parse_from(["maze_gen", "layout.json", "--view", "--seed", "9"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("layout.json")));
        assert!(args.view);
        assert_eq!(args.seed, Some(9));
    }

    #[test]
    fn test_help_is_not_a_config_path() {
        let err = Args::try_parse_from(["maze_gen", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = Args::try_parse_from(["maze_gen", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
