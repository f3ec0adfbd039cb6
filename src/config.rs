// src/config.rs
//! Run configuration, captured once and passed explicitly into the engine.

use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_APP_DIR;
use crate::error::{GuardError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub app_dir: PathBuf,
    /// Reserved: accepted on the command line, does not change matching yet.
    pub strict: bool,
    pub verbose: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(DEFAULT_APP_DIR)
    }
}

impl ScanConfig {
    #[must_use]
    pub fn new(app_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_dir: app_dir.into(),
            strict: false,
            verbose: false,
        }
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Resolves `app_dir` to an absolute directory path.
    ///
    /// # Errors
    /// Returns `AppDirNotFound` if nothing exists at the path, `NotADirectory`
    /// if it is a file, or `Io` if the path cannot be canonicalized.
    pub fn resolve_root(&self) -> Result<PathBuf> {
        let absolute = absolutize(&self.app_dir)?;
        if !absolute.exists() {
            return Err(GuardError::AppDirNotFound { path: absolute });
        }
        if !absolute.is_dir() {
            return Err(GuardError::NotADirectory { path: absolute });
        }
        absolute
            .canonicalize()
            .map_err(|e| GuardError::io(e, &absolute))
    }
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| GuardError::io(e, path))?;
    Ok(cwd.join(path))
}
