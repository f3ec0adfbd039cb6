// src/scanner.rs
//! Line-oriented detection of interactive elements missing a `testID`.
//!
//! This is a heuristic, not a parser. A line is a candidate when it matches an
//! element signature and opens a tag (`<` somewhere in the trimmed text). The
//! candidate is compliant when any exemption appears in its context window:
//! the line itself plus the following lines up to [`CONTEXT_WINDOW`] in total,
//! joined with spaces. Opening tags often spread their props over several
//! lines, so matching the window instead of the line keeps false positives
//! down. Mentions in comments or strings that happen to contain `<` are still
//! reported; that imprecision is accepted.

use std::fs;
use std::path::Path;

use crate::constants::CONTEXT_WINDOW;
use crate::error::{GuardError, Result};
use crate::rules::RuleSet;
use crate::types::Violation;

const TAG_OPEN: char = '<';

/// Reads and scans one file.
///
/// # Errors
/// Returns `GuardError::Io` if the file cannot be read. Invalid UTF-8 is
/// decoded lossily and scanned like any other text.
pub fn scan_file(path: &Path, rules: &RuleSet) -> Result<Vec<Violation>> {
    let bytes = fs::read(path).map_err(|e| GuardError::io(e, path))?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(scan_source(path, &content, rules))
}

/// Scans already-loaded source text. Violations come out in line order.
#[must_use]
pub fn scan_source(path: &Path, content: &str, rules: &RuleSet) -> Vec<Violation> {
    let lines: Vec<&str> = content.lines().collect();
    let mut out = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let Some(element) = rules.match_element(line) else {
            continue;
        };

        let trimmed = line.trim();
        if !trimmed.contains(TAG_OPEN) {
            continue;
        }

        if rules.match_exemption(&context_window(&lines, idx)).is_some() {
            continue;
        }

        out.push(Violation::new(path, idx + 1, trimmed, element));
    }

    out
}

/// Joins line `idx` with up to `CONTEXT_WINDOW - 1` following lines.
/// Truncated at end of input.
fn context_window(lines: &[&str], idx: usize) -> String {
    let end = (idx + CONTEXT_WINDOW).min(lines.len());
    lines[idx..end].join(" ")
}
