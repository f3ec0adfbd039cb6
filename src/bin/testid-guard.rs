use clap::Parser;
use testid_guard_core::cli::{self, Cli};
use testid_guard_core::exit::GuardExit;

fn main() -> GuardExit {
    let cli = Cli::parse();
    GuardExit::from(cli::handle_scan(&cli))
}
