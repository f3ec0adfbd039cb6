//! Machine-readable report for CI pipelines.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use crate::types::{ScanReport, Violation};

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub root: &'a Path,
    pub files_scanned: usize,
    pub violation_count: usize,
    pub passed: bool,
    pub violations: &'a [Violation],
}

impl<'a> From<&'a ScanReport> for JsonReport<'a> {
    fn from(report: &'a ScanReport) -> Self {
        Self {
            root: &report.root,
            files_scanned: report.files_scanned,
            violation_count: report.violation_count(),
            passed: report.is_clean(),
            violations: &report.violations,
        }
    }
}

/// Serializes the report as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_json(report: &ScanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::from(report))?)
}

/// Prints the report as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json(report: &ScanReport) -> Result<()> {
    println!("{}", to_json(report)?);
    Ok(())
}
