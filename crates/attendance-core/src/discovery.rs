//! Startup checks for the configured input file

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Files next to `path` that share its extension, sorted by path
///
/// Returns an empty list if the parent directory does not exist.
pub fn sibling_files(path: &Path) -> Vec<PathBuf> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let Some(ext) = path.extension() else {
        return Vec::new();
    };
    if !dir.is_dir() {
        return Vec::new();
    }

    let mut found: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension() == Some(ext))
        .collect();
    found.sort();
    found
}

/// Fail with [`Error::InputNotFound`] if the input file is missing
pub fn ensure_input(path: &Path) -> Result<()> {
    if path.is_file() {
        return Ok(());
    }

    let siblings = sibling_files(path);
    warn!(
        "input file {} does not exist ({} similar files nearby)",
        path.display(),
        siblings.len()
    );
    Err(Error::InputNotFound {
        path: path.to_path_buf(),
        siblings,
    })
}
