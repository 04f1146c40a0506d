use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct PruneArgs {
    /// Root directory of the calibration image tree
    #[arg(short, long)]
    pub root: PathBuf,

    /// Directory name suffix marking a labeled directory
    #[arg(short, long, default_value = "_lateral")]
    pub suffix: String,

    /// Marker appended to an image stem to form its labeled file name
    #[arg(short = 'm', long, default_value = "_labeled")]
    pub labeled_marker: String,
}
