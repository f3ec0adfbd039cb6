// src/engine.rs
//! Orchestrates one run: resolve root, discover files, scan each in order.

use colored::Colorize;
use std::path::PathBuf;

use crate::config::ScanConfig;
use crate::discovery;
use crate::error::Result;
use crate::rules::RuleSet;
use crate::scanner;
use crate::types::{ScanReport, Violation};

pub struct Engine<'r> {
    config: ScanConfig,
    rules: &'r RuleSet,
}

impl Engine<'static> {
    /// Engine over the built-in rule catalog.
    #[must_use]
    pub fn new(config: ScanConfig) -> Self {
        Self::with_rules(config, RuleSet::standard())
    }
}

impl<'r> Engine<'r> {
    #[must_use]
    pub fn with_rules(config: ScanConfig, rules: &'r RuleSet) -> Self {
        Self { config, rules }
    }

    /// Resolves the configured root and scans it.
    ///
    /// # Errors
    /// Fails before any scanning if the root is missing, or on the first
    /// traversal or read error.
    pub fn run(&self) -> Result<ScanReport> {
        let root = self.config.resolve_root()?;
        self.run_at(root)
    }

    /// Scans an already-resolved root directory.
    ///
    /// # Errors
    /// Returns the first traversal or read error; no partial report.
    pub fn run_at(&self, root: PathBuf) -> Result<ScanReport> {
        self.log(&format!(
            "{} element signatures, {} exemption signatures",
            self.rules.elements().len(),
            self.rules.exemptions().len()
        ));
        if self.config.strict {
            self.log("strict mode requested; no additional signatures are defined");
        }

        let files = discovery::discover(&root)?;
        self.log(&format!("discovered {} UI files", files.len()));

        let violations = self.scan(&files)?;
        Ok(ScanReport::new(root, violations, files.len()))
    }

    /// Scans files sequentially in the given order, stopping at the first error.
    ///
    /// # Errors
    /// Returns the read error of the first unreadable file.
    pub fn scan(&self, files: &[PathBuf]) -> Result<Vec<Violation>> {
        let mut all = Vec::new();
        for path in files {
            let found = scanner::scan_file(path, self.rules)?;
            self.log(&format!("scanned {} ({} violations)", path.display(), found.len()));
            all.extend(found);
        }
        Ok(all)
    }

    fn log(&self, msg: &str) {
        if self.config.verbose {
            eprintln!("{}", format!("  {msg}").dimmed());
        }
    }
}
