//! vlsm - Variable-length subnet mask planner

use clap::Parser;
use std::process::ExitCode;
use vlsm_cli::{output, Cli};

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    vlsm_cli::init_logging(cli.verbose);

    // Execute command
    match vlsm_cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::failure(&err);
            ExitCode::FAILURE
        }
    }
}
