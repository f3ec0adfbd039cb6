use clap::Parser;
use std::path::PathBuf;

use crate::config::ScanConfig;
use crate::constants::DEFAULT_APP_DIR;

#[derive(Parser, Debug)]
#[command(
    name = "testid-guard",
    version,
    about = "Flags interactive UI elements that are missing a testID"
)]
pub struct Cli {
    /// Root directory to scan
    #[arg(long, value_name = "PATH", default_value = DEFAULT_APP_DIR)]
    pub app_dir: PathBuf,
    /// Also flag optional wrapper elements (reserved; no extra rules yet)
    #[arg(long)]
    pub strict: bool,
    /// Print per-file progress to stderr
    #[arg(long, short)]
    pub verbose: bool,
    /// Emit the report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    #[must_use]
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig::new(&self.app_dir)
            .with_strict(self.strict)
            .with_verbose(self.verbose)
    }
}
