// src/discovery.rs
use crate::constants::{is_ui_source, should_prune};
use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Recursively collects UI source files under `root`.
///
/// Pruned directories are never entered. Entries are visited in file-name
/// order so repeated runs over an unchanged tree yield the same sequence.
///
/// # Errors
/// Returns the first traversal error; no partial file list is produced.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_pruned(e));

    let mut paths = Vec::new();
    for item in walker {
        let entry = item?;
        if is_file_like(&entry) && is_ui_source(&entry.file_name().to_string_lossy()) {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

/// Regular files, plus symlinks that resolve to a file. Symlinked
/// directories are not descended into.
fn is_file_like(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn is_pruned(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && should_prune(&entry.file_name().to_string_lossy())
}
