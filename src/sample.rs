use crate::types::{frame_name::FrameName, sample_args::SampleArgs};
use anyhow::{Context, Result, anyhow};
use regex::Regex;
use std::fs;

// Greedy prefix, trailing digit run: "rear01-0040.jpg" -> ("rear01", 40)
const FRAME_PATTERN: &str = r"(.+)-(\d+)";

/// Copies every frame whose number is a multiple of `args.step` from the
/// source directory to the destination, renumbered to `floor(number / step)`.
pub fn run_sample(args: &SampleArgs) -> Result<()> {
    if args.step == 0 {
        return Err(anyhow!("Step must be positive"));
    }

    let pattern = Regex::new(FRAME_PATTERN)?;

    let entries = fs::read_dir(&args.source)
        .with_context(|| format!("Failed to read source directory: {:?}", args.source))?;

    let mut copied = 0u64;
    for entry_res in entries {
        let entry = entry_res?;
        let path = entry.path();
        if !path.is_file() || !path.extension().is_some_and(|ext| ext == "jpg") {
            continue;
        }

        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => {
                eprintln!("Warning: Skipping non UTF-8 file name: {path:?}");
                continue;
            }
        };

        let frame = match parse_frame_name(&pattern, file_name) {
            Some(frame) => frame,
            None => {
                eprintln!("Warning: Could not parse frame number from file name: {file_name}");
                continue;
            }
        };

        if frame.number % args.step != 0 {
            continue;
        }

        let out_name = format!("{}-{:03}.jpg", frame.prefix, frame.number / args.step);
        println!("{out_name}");

        let dest_path = args.dest.join(&out_name);
        fs::copy(&path, &dest_path)
            .with_context(|| format!("Failed to copy frame to {dest_path:?}"))?;
        copied += 1;
    }

    println!("Copied {copied} frame(s) to {:?}", args.dest);
    Ok(())
}

/// Splits a sequence file name into its prefix and frame number.
/// The prefix is greedy, so "cam-2-0040.jpg" keeps "cam-2" as the prefix.
fn parse_frame_name(pattern: &Regex, file_name: &str) -> Option<FrameName> {
    let caps = pattern.captures(file_name)?;
    let number = caps[2].parse().ok()?;

    Some(FrameName {
        prefix: caps[1].to_string(),
        number,
    })
}
