// src/constants.rs
//! Fixed traversal and matching parameters.

/// File suffixes treated as UI source.
pub const UI_EXTENSIONS: &[&str] = &[".tsx", ".jsx"];

/// Directory names never descended into: dependency caches, VCS metadata,
/// local tool caches and test directories.
pub const PRUNE_DIRS: &[&str] = &["node_modules", ".expo", ".git", "__tests__"];

/// Number of physical lines (current line included) joined for exemption matching.
pub const CONTEXT_WINDOW: usize = 5;

/// Directory scanned when `--app-dir` is not given.
pub const DEFAULT_APP_DIR: &str = "app";

/// Returns `true` if a directory with this name must be skipped.
#[must_use]
pub fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name)
}

/// Returns `true` if the file name carries a recognized UI-source extension.
#[must_use]
pub fn is_ui_source(name: &str) -> bool {
    UI_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}
