//! CLI for the aviary image fetcher.

mod commands;

use anyhow::Result;
use aviary_core::config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_batch, run_fetch};

/// Top-level CLI for the aviary image fetcher.
#[derive(Debug, Parser)]
#[command(name = "aviary")]
#[command(about = "aviary: batch species-image fetcher and normalizer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch and normalize every record in a CSV batch.
    Run {
        /// Path to the input CSV (scientific_name, image_url columns).
        input: PathBuf,

        /// Base directory for stored images (default from config).
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Fetch and normalize a single entity.
    Fetch {
        /// Entity name; determines the output path.
        name: String,

        /// Image URL.
        url: String,

        /// Base directory for stored images (default from config).
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run { input, output_dir } => {
                if let Some(dir) = output_dir {
                    cfg.output_dir = dir;
                }
                run_batch(&input, &cfg)?;
            }
            CliCommand::Fetch {
                name,
                url,
                output_dir,
            } => {
                if let Some(dir) = output_dir {
                    cfg.output_dir = dir;
                }
                run_fetch(&name, &url, &cfg)?;
            }
        }

        Ok(())
    }
}
