use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// List the `*.json` files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into, and entries that are not regular
/// files (after following symlinks) are skipped even when their name ends in
/// `.json`. A missing or unreadable `dir` is an error.
pub fn find_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| Error::Scan {
            path: dir.to_path_buf(),
            source,
        })?;
        let is_json = entry
            .file_name()
            .to_str()
            .is_some_and(|n| n.ends_with(".json"));
        if is_json && entry.path().is_file() {
            out.push(entry.into_path());
        }
    }
    Ok(out)
}
