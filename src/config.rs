//! Project config (sheetshift.yaml) parsing.
//!
//! The config sets the input and output directories and default
//! conversion options for the batch driver. Command-line flags take
//! precedence over anything set here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::converter::ConvertOptions;
use crate::error::{Result, ShiftError};

/// The name of the config file.
pub const CONFIG_FILENAME: &str = "sheetshift.yaml";

/// Default suffix appended to output file stems.
pub const DEFAULT_SUFFIX: &str = "_converted";

/// Project config loaded from sheetshift.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding source sheets.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Directory converted sheets are written to.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Suffix appended to each output file stem.
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Default scale factor.
    #[serde(default)]
    pub scale: Option<i64>,

    /// Default background tolerance.
    #[serde(default)]
    pub tolerance: Option<i64>,
}

fn default_input() -> PathBuf {
    PathBuf::from("input_files")
}

fn default_output() -> PathBuf {
    PathBuf::from("output_files")
}

fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            suffix: default_suffix(),
            scale: None,
            tolerance: None,
        }
    }
}

impl Config {
    /// Load config from a sheetshift.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ShiftError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `sheetshift.yaml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| ShiftError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Render the config as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ShiftError::Config {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }

    /// Conversion options with built-in defaults filled in.
    pub fn convert_options(&self) -> ConvertOptions {
        let defaults = ConvertOptions::default();
        ConvertOptions {
            scale: self.scale.unwrap_or(defaults.scale),
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
        }
    }
}
