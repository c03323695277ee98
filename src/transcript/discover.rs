use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// `*.csv` files directly inside `dir`, sorted by file name
fn csv_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.context(format!("Failed to read directory entry in {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() && is_csv(path) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Resolve the CSV inputs for a run.
///
/// A directory yields its `*.csv` files (not recursive), a file yields
/// itself, and no input searches the current directory and `./data`.
/// Paths resolving to the same file are kept once, first occurrence wins.
pub fn discover_csv_files(input: Option<&Path>) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();

    match input {
        Some(path) if path.is_dir() => candidates.extend(csv_files_in(path)?),
        Some(path) if path.is_file() => candidates.push(path.to_path_buf()),
        Some(path) => {
            tracing::warn!(path = %path.display(), "input path does not exist");
        }
        None => {
            let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
            for base in [cwd.clone(), cwd.join("data")] {
                if base.is_dir() {
                    candidates.extend(csv_files_in(&base)?);
                }
            }
        }
    }

    let mut seen = HashSet::new();
    let unique = candidates
        .into_iter()
        .filter(|path| {
            let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.clone());
            seen.insert(resolved)
        })
        .collect();

    Ok(unique)
}

/// Compute SHA256 hash of file contents
pub fn hash_bytes(contents: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contents);
    hex::encode(hasher.finalize())
}
