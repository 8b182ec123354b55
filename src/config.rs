//! Optional configuration file (appicons.yaml).
//!
//! Only read when passed with `--config`. Every field is optional; an empty
//! file reproduces the built-in iOS icon set in the current directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::types::{IconPalette, IconSpec};

/// Conventional config file name.
pub const CONFIG_FILENAME: &str = "appicons.yaml";

/// Icon generation settings loaded from appicons.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the PNG files are written to.
    pub output: PathBuf,

    /// Smooth shape edges.
    pub anti_alias: bool,

    /// Fill colours.
    pub colours: IconPalette,

    /// Sizes to generate, in order. Replaces the iOS table when set.
    pub sizes: Vec<IconSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            anti_alias: true,
            colours: IconPalette::default(),
            sizes: IconSpec::ios_defaults(),
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // serde_yaml rejects a blank document outright
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content).map_err(|e| IconError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;

        if config.sizes.is_empty() {
            return Err(IconError::Config {
                message: "No icon sizes configured".to_string(),
                help: Some("Remove `sizes` to use the default iOS table".to_string()),
            });
        }

        Ok(config)
    }

    /// Load `explicit` if given, else the built-in defaults.
    ///
    /// Files in the working directory are never picked up implicitly.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Keep only the sizes whose labels appear in `labels`, in table order.
    ///
    /// An empty filter keeps everything. Unknown labels are an error.
    pub fn select_sizes(&self, labels: &[String]) -> Result<Vec<IconSpec>> {
        if labels.is_empty() {
            return Ok(self.sizes.clone());
        }

        if let Some(unknown) = labels
            .iter()
            .find(|l| !self.sizes.iter().any(|s| s.label() == l.as_str()))
        {
            let known: Vec<&str> = self.sizes.iter().map(IconSpec::label).collect();
            return Err(IconError::Config {
                message: format!("Unknown icon size: {}", unknown),
                help: Some(format!("Available sizes: {}", known.join(", "))),
            });
        }

        Ok(self
            .sizes
            .iter()
            .filter(|s| labels.iter().any(|l| l == s.label()))
            .cloned()
            .collect())
    }
}
