//! Config command implementation

use crate::config::CliConfig;
use crate::{output, CliError, Result};
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn execute(args: ConfigArgs, config: &CliConfig, config_path: Option<&Path>) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        ConfigAction::Init { force } => {
            let path = target_path(config_path)?;
            if path.exists() && !force {
                return Err(CliError::Config(format!(
                    "{} already exists, use --force to overwrite",
                    path.display()
                )));
            }

            CliConfig::default().save(&path)?;
            output::saved("Configuration", &path);
            Ok(())
        }
    }
}

fn target_path(config_path: Option<&Path>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => CliConfig::config_path()
            .ok_or_else(|| CliError::Config("no user config directory available".to_string())),
    }
}
