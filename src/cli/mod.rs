// src/cli/mod.rs
//! Command-line shell around the scanning engine.

pub mod args;
pub mod handlers;

pub use args::Cli;
pub use handlers::handle_scan;
