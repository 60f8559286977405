//! Application configuration.
//!
//! Settings live in `config.toml` under the platform data directory. A missing
//! file means defaults; a malformed one is an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name used when no output is given or the output is a directory.
pub const DEFAULT_OUTPUT_FILE: &str = "workout.zwo";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings
    pub output: OutputSettings,
}

/// Where and how workout files are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// File name used when the output is omitted or is a directory
    pub default_file_name: String,
    /// Create missing output directories without `--force`
    pub create_missing_dirs: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            default_file_name: DEFAULT_OUTPUT_FILE.to_string(),
            create_missing_dirs: false,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "zwocreate", "zwocreate")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from `path`, falling back to defaults when
/// the file does not exist.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
