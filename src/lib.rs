pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod exit;
pub mod reporting;
pub mod rules;
pub mod scanner;
pub mod types;

pub use config::ScanConfig;
pub use engine::Engine;
pub use error::{GuardError, Result};
pub use exit::GuardExit;
pub use rules::RuleSet;
pub use types::{ScanReport, Violation};
