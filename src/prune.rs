use crate::types::prune_args::PruneArgs;
use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Walks the tree under `args.root` and, for every labeled directory found,
/// deletes the unlabeled images in its companion directory that have no
/// labeled counterpart.
pub fn run_prune(args: &PruneArgs) -> Result<()> {
    if !args.root.is_dir() {
        return Err(anyhow!("Root directory not found: {:?}", args.root));
    }

    let mut deleted = 0u64;

    for entry_res in WalkDir::new(&args.root).min_depth(1) {
        let entry = entry_res
            .with_context(|| format!("Failed to walk directory tree: {:?}", args.root))?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let labeled_dir = entry.path();
        let dir_name = match labeled_dir.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };
        let companion_name = match dir_name.strip_suffix(&args.suffix) {
            Some(name) if !name.is_empty() => name,
            _ => continue,
        };
        if !labeled_dir.is_dir() {
            continue;
        }

        let companion_dir = labeled_dir.with_file_name(companion_name);
        deleted += prune_pair(&companion_dir, labeled_dir, &args.labeled_marker)?;
    }

    println!("Deleted {deleted} unlabeled image(s) under {:?}", args.root);
    Ok(())
}

/// Deletes every `.png` in `companion_dir` lacking a `<stem><marker>.png`
/// counterpart in `labeled_dir`. Returns the number of files deleted.
fn prune_pair(companion_dir: &Path, labeled_dir: &Path, marker: &str) -> Result<u64> {
    let entries = fs::read_dir(companion_dir)
        .with_context(|| format!("Failed to read companion directory: {companion_dir:?}"))?;

    let mut deleted = 0;
    for entry_res in entries {
        let entry = entry_res?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let stem = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => match name.strip_suffix(".png") {
                Some(stem) => stem,
                None => continue,
            },
            None => continue,
        };

        let labeled_file = labeled_dir.join(format!("{stem}{marker}.png"));
        if !labeled_file.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to delete unlabeled image: {path:?}"))?;
            deleted += 1;
        }
    }

    Ok(deleted)
}
