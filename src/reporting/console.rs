//! Console output for scan results.
//!
//! One block per violation in report order, then a summary and a pointer to
//! the naming convention. A clean run prints a single confirmation line.

use crate::types::{ScanReport, Violation};
use colored::Colorize;
use std::fmt::Write;
use std::path::Path;

use super::guidance::{convention_pointer, remediation_hint};
use super::shared::{current_dir, display_path};

/// Prints the scanning banner for a resolved root.
pub fn print_banner(root: &Path) {
    println!(
        "{}\n",
        format!("🔍 Scanning {} for testID violations...", root.display()).bold()
    );
}

/// Prints the report to stdout, paths relative to the working directory.
pub fn print_report(report: &ScanReport) {
    let cwd = current_dir();
    print!("{}", render_report(report, cwd.as_deref()));
}

/// Renders the full report. Paths under `base` are shown relative to it.
#[must_use]
pub fn render_report(report: &ScanReport, base: Option<&Path>) -> String {
    let mut out = String::new();
    if report.is_clean() {
        render_success(&mut out, report);
    } else {
        for v in &report.violations {
            render_violation(&mut out, v, base);
        }
        render_summary(&mut out, report);
    }
    out
}

fn render_success(out: &mut String, report: &ScanReport) {
    let line = format!(
        "✅ All interactive elements have testIDs. {} files scanned.",
        report.files_scanned
    );
    let _ = writeln!(out, "{}", line.green().bold());
}

fn render_violation(out: &mut String, v: &Violation, base: Option<&Path>) {
    let location = format!("{}:{}", display_path(&v.file, base), v.line);
    let _ = writeln!(
        out,
        "{} {} {}",
        "❌ VIOLATION:".red().bold(),
        location,
        format!("({})", v.element).dimmed()
    );
    let _ = writeln!(out, "   {} {}", "→".blue(), v.content);
    let _ = writeln!(out, "   {} {}", "→".blue(), remediation_hint().yellow());
    let _ = writeln!(out);
}

fn render_summary(out: &mut String, report: &ScanReport) {
    let summary = format!(
        "⛔ Found {} testID violation(s) across {} files.",
        report.violation_count(),
        report.files_scanned
    );
    let _ = writeln!(out, "\n{}", summary.red().bold());
    let _ = writeln!(out, "   {}\n", convention_pointer().dimmed());
}
