//! Generator configuration.
//!
//! All settings are fixed before a run starts and cannot change while
//! the pixel scan is in progress.

use crate::analysis::QualityThresholds;
use crate::extraction::BitMode;
use crate::input::Channel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Derive each noise bit from the two least significant bits.
    pub consider_two_lsb: bool,
    /// Channel sampled in both images.
    pub channel: Channel,
    /// Raw byte dump destination, if any.
    pub output_file: Option<PathBuf>,
    /// Truncate the output file (true) or append to it (false).
    pub overwrite_output_file: bool,
    /// Visualization image destination, if any.
    pub output_image: Option<PathBuf>,
    /// Remove both input images after a successful run.
    pub delete_input_files: bool,
    /// Fixed seed for the skip scheduler. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            consider_two_lsb: false,
            channel: Channel::Blue,
            output_file: None,
            overwrite_output_file: true,
            output_image: None,
            delete_input_files: false,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Bit derivation mode selected by `consider_two_lsb`.
    pub fn bit_mode(&self) -> BitMode {
        BitMode::from_two_lsb(self.consider_two_lsb)
    }
}

/// Configuration file errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The contents are not valid TOML for this format.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Generation settings.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Output quality limits.
    #[serde(default)]
    pub quality: QualityThresholds,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        content.parse()
    }
}

impl std::str::FromStr for FileConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
