// src/exit.rs
//! Process exit codes for `testid-guard`.
//!
//! Pipelines only rely on zero vs non-zero: a run passes if and only if no
//! violation was found.

use colored::Colorize;
use std::process::Termination;

use crate::types::ScanReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardExit {
    /// Every interactive element carries a test identifier.
    Success,
    /// At least one violation was reported.
    ViolationsFound,
    /// The run aborted (missing app directory, unreadable file, walk failure).
    Error,
}

impl GuardExit {
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::ViolationsFound | Self::Error => 1,
        }
    }
}

impl From<&ScanReport> for GuardExit {
    fn from(report: &ScanReport) -> Self {
        if report.is_clean() {
            Self::Success
        } else {
            Self::ViolationsFound
        }
    }
}

impl Termination for GuardExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<anyhow::Result<GuardExit>> for GuardExit {
    fn from(res: anyhow::Result<GuardExit>) -> Self {
        match res {
            Ok(exit) => exit,
            Err(e) => {
                eprintln!("{} {e}", "error:".red().bold());
                Self::Error
            }
        }
    }
}
