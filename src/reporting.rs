//! Report rendering: human console output and machine-readable JSON.

pub mod console;
pub mod guidance;
pub mod json;
mod shared;

pub use console::{print_banner, print_report, render_report};
pub use json::print_json;
