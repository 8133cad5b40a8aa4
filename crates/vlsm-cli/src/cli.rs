//! CLI structure and argument parsing

use crate::commands::Commands;
use clap::Parser;
use std::path::PathBuf;

/// vlsm - Variable-length subnet mask planner
#[derive(Debug, Parser)]
#[command(name = "vlsm")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Commands
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}
