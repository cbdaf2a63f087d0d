//! Tool configuration.
//!
//! Defaults can be overridden by a YAML file and then by command-line flags:
//!
//! ```yaml
//! total_width: 1280
//! min_column_width: 60
//! scrollbar_size: 15
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Layout defaults applied when the layout file leaves them out.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Grid width used when the layout file has none.
    pub total_width: usize,
    /// Minimum width used when the layout file has none.
    pub min_column_width: usize,
    /// Pixels reserved for the vertical scrollbar when `--scrollbar` is set.
    pub scrollbar_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            total_width: 1000,
            min_column_width: 80,
            scrollbar_size: 17,
        }
    }
}

impl Config {
    /// Parse a YAML configuration document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document means "all defaults".
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(yaml).context("invalid configuration")
    }

    /// Load configuration from `path`, or return the defaults when there is none.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Config::default());
        };

        let yaml = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Config::from_yaml_str(&yaml)
            .with_context(|| format!("in config file {}", path.display()))?;

        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
