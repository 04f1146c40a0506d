use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct SampleArgs {
    /// Directory containing the numbered input frames
    #[arg(short, long)]
    pub source: PathBuf,

    /// Destination directory for sampled frames (must already exist)
    #[arg(short, long)]
    pub dest: PathBuf,

    /// Keep only frames whose number is a multiple of this step
    #[arg(short = 'k', long, default_value_t = 20)]
    pub step: u64,
}
