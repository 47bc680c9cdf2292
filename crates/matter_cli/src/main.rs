//! Matter CLI
//!
//! Inspect, sample, and validate Material motion curves.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "matter", version, about = "Material motion curve toolkit")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a starter matter.toml
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Print eased values for a configured curve or preset
    Sample {
        /// Curve name from matter.toml, or a preset id
        curve: String,

        /// Number of intervals between 0 and 1 (at most 10000)
        #[arg(long)]
        steps: Option<usize>,

        /// Directory containing matter.toml
        #[arg(long, default_value = ".")]
        config: PathBuf,
    },

    /// List built-in presets
    Presets,

    /// Validate every curve in matter.toml
    Check {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = match cli.command {
        Commands::Init { path } => commands::init(&path)?,
        Commands::Sample {
            curve,
            steps,
            config,
        } => commands::run_sample(&curve, steps, &config)?,
        Commands::Presets => commands::presets(),
        Commands::Check { path } => commands::check(&path)?,
    };

    print!("{output}");
    Ok(())
}
