// src/cli/handlers.rs
use crate::cli::args::Cli;
use crate::engine::Engine;
use crate::exit::GuardExit;
use crate::reporting;
use anyhow::Result;
use colored::Colorize;

/// Handles a full scan: resolve root, scan, report, pick the exit code.
///
/// # Errors
/// Returns error if the app directory is missing, traversal fails, a file
/// cannot be read, or JSON serialization fails.
pub fn handle_scan(cli: &Cli) -> Result<GuardExit> {
    let config = cli.scan_config();
    let root = config.resolve_root()?;

    if cli.verbose {
        eprintln!("{}", format!("  root: {}", root.display()).dimmed());
    }
    if !cli.json {
        reporting::print_banner(&root);
    }

    let report = Engine::new(config).run_at(root)?;

    if cli.json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_report(&report);
    }

    Ok(GuardExit::from(&report))
}
