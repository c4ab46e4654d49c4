//! User configuration loaded from a TOML file.
//!
//! Precedence is flag > environment > file > default. Flags and environment
//! variables are resolved by clap; this module only covers the file layer.

use std::fs;
use std::path::{Path, PathBuf};

use jira_core::atlassian::adf::Dialect;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Dialect used when `--format` is not given
    pub format: Dialect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Config {
    /// `<config dir>/jira/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs_next::config_dir().map(|dir| dir.join("jira").join("config.toml"))
    }

    /// Load the configuration file.
    ///
    /// An explicit path must exist. The default path is optional and falls
    /// back to built-in defaults when missing.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::Config(f!(
                        "Configuration file not found: {}",
                        path.display()
                    ))
                    .into());
                }
                path.to_path_buf()
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    log::debug!("No configuration file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        log::debug!("Loading configuration from {}", path.display());

        let contents = fs::read_to_string(&path)
            .wrap_err_with(|| f!("Failed to read configuration file {}", path.display()))?;

        Self::from_toml(&contents)
            .wrap_err_with(|| f!("Invalid configuration file {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> std::result::Result<Self, Error> {
        toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))
    }
}
