// src/types.rs
use serde::Serialize;
use std::path::PathBuf;

/// One interactive element found without a test identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub file: PathBuf,
    /// 1-based physical line number.
    pub line: usize,
    /// The offending line, trimmed.
    pub content: String,
    /// Label of the first element signature that matched.
    pub element: &'static str,
}

impl Violation {
    #[must_use]
    pub fn new(
        file: impl Into<PathBuf>,
        line: usize,
        content: impl Into<String>,
        element: &'static str,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            content: content.into(),
            element,
        }
    }
}

/// Aggregated results of one run.
///
/// Violations are ordered by file discovery order, then ascending line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub root: PathBuf,
    pub violations: Vec<Violation>,
    pub files_scanned: usize,
}

impl ScanReport {
    #[must_use]
    pub fn new(root: PathBuf, violations: Vec<Violation>, files_scanned: usize) -> Self {
        Self {
            root,
            violations,
            files_scanned,
        }
    }

    /// The sole success condition.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }
}
