use anyhow::Result;
use clap::{Parser, Subcommand};
use std::time::Instant;

mod prune;
mod sample;
mod types;

use crate::types::{prune_args::PruneArgs, sample_args::SampleArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Housekeeping tools for calibration image sets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Delete unlabeled images whose labeled counterpart is missing
    Prune(PruneArgs),
    /// Copy every Nth frame of an image sequence, renumbered
    Sample(SampleArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let start_time = Instant::now();

    match cli.command {
        Commands::Prune(args) => {
            println!("Starting prune...");
            prune::run_prune(&args)?;
        }
        Commands::Sample(args) => {
            println!("Starting sampling...");
            sample::run_sample(&args)?;
        }
    }

    let duration = start_time.elapsed();
    println!("\nCommand completed in: {duration:.2?}");
    Ok(())
}
