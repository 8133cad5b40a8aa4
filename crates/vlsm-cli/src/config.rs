//! Configuration management for the vlsm CLI
//!
//! Handles loading and saving configuration from the user config directory
//! (`vlsm/config.toml`) or an explicit `--config` path.

use crate::{CliError, Result};
use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How a plan is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One block of facts per subnet
    #[default]
    Text,
    /// Single summary table
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Whether the output is meant for other programs
    pub fn is_machine_readable(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Yaml)
    }
}

/// Which topology diagram to draw after the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    #[default]
    None,
    /// Text tree
    Tree,
    /// Graphviz DOT
    Dot,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Output format used when `--format` is not given
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Diagram drawn when `--graph` is not given
    #[serde(default)]
    pub default_graph: GraphKind,

    /// Colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl CliConfig {
    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and defaults are used if it is missing.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Self::load_from(path)
            }
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load from `path` if it exists, otherwise as [`CliConfig::load`] would
    /// without an explicit path
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if !path.exists() => Ok(Self::default()),
            other => Self::load(other),
        }
    }

    /// Parse configuration from a TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Get the default config path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vlsm").join("config.toml"))
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::default(),
            default_graph: GraphKind::default(),
            color: default_true(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.default_format, OutputFormat::Text);
        assert_eq!(config.default_graph, GraphKind::None);
        assert!(config.color);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: CliConfig = toml::from_str("default_format = \"json\"").unwrap();
        assert_eq!(config.default_format, OutputFormat::Json);
        assert_eq!(config.default_graph, GraphKind::None);
        assert!(config.color);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = CliConfig {
            default_format: OutputFormat::Table,
            default_graph: GraphKind::Dot,
            color: false,
        };
        config.save(&path).unwrap();

        let loaded = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");

        assert!(matches!(
            CliConfig::load(Some(&path)),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        std::fs::write(&path, "default_format = \"pdf\"").unwrap();

        assert!(matches!(
            CliConfig::load(Some(&path)),
            Err(CliError::Config(_))
        ));
    }
}
