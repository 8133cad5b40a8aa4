//! Command implementations

pub mod config;
pub mod interactive;
pub mod plan;
pub mod prefix;

use crate::{CliConfig, Result};
use clap::Subcommand;
use std::path::Path;

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Allocate subnets for a list of host counts
    Plan(plan::PlanArgs),

    /// Show the prefix chosen for host counts
    Prefix(prefix::PrefixArgs),

    /// Prompt for a base network and host counts
    Interactive(interactive::InteractiveArgs),

    /// Show or create the configuration file
    Config(config::ConfigArgs),
}

impl Commands {
    pub fn execute(self, cli_config: &CliConfig, config_path: Option<&Path>) -> Result<()> {
        match self {
            Commands::Plan(args) => plan::execute(args, cli_config),
            Commands::Prefix(args) => prefix::execute(args),
            Commands::Interactive(args) => interactive::execute(args, cli_config),
            Commands::Config(args) => config::execute(args, cli_config, config_path),
        }
    }
}
