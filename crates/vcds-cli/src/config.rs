//! Configuration file handling for the vcds CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// Configuration for the CLI tool
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Default output format: table, json or csv
    pub output: Option<String>,
    /// Disable colored output
    pub no_color: Option<bool>,
    /// Directory with raw measurement exports
    pub input_dir: Option<PathBuf>,
    /// Directory with cleaned measurement tables
    pub data_dir: Option<PathBuf>,
    /// Directory for rendered reports
    pub report_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("vcds-cli");

        Ok(config_dir.join("config.toml"))
    }

    /// Merge CLI arguments over config file values
    pub fn merge_with_args(&self, output: Option<OutputFormat>, no_color: bool) -> MergedConfig {
        MergedConfig {
            output: output
                .or_else(|| self.output.as_deref().and_then(OutputFormat::from_name))
                .unwrap_or_default(),
            no_color: no_color || self.no_color.unwrap_or(false),
            input_dir: self
                .input_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("./org")),
            data_dir: self
                .data_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("./data")),
            report_dir: self
                .report_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("./output")),
        }
    }
}

/// Fully resolved configuration after merging CLI args
#[derive(Debug, Clone, PartialEq)]
pub struct MergedConfig {
    pub output: OutputFormat,
    pub no_color: bool,
    pub input_dir: PathBuf,
    pub data_dir: PathBuf,
    pub report_dir: PathBuf,
}
