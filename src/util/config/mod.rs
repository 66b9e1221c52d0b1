//! User-level configuration
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. User-level (~/.config/attempt-lazy/config.toml)
//! 3. Default values
//! ```
//!
//! # Usage
//!
//! ```rust
//! use attempt_lazy::util::config::{load_user_config, UserConfig};
//!
//! // Returns defaults when no config file exists
//! let config: UserConfig = load_user_config().unwrap_or_default();
//! ```

use crate::util::logger::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Directory name under the platform config directory
const CONFIG_DIR_NAME: &str = "attempt-lazy";

/// User-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserConfig {
    /// Log settings
    #[serde(default)]
    pub log: LogConfig,
    /// Demo settings
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Log configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LogConfig {
    /// Level used when `--verbose` is not given
    #[serde(default)]
    pub level: LogLevel,
}

/// Demo configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Colored headings
    #[serde(default = "default_colors")]
    pub colors: bool,
    /// Demos run by `all`, in order
    #[serde(default = "default_demos")]
    pub default: Vec<String>,
}

fn default_colors() -> bool {
    true
}

fn default_demos() -> Vec<String> {
    crate::demos::DEMOS
        .iter()
        .map(|demo| demo.name.to_string())
        .collect()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            default: default_demos(),
        }
    }
}

/// Get the user config directory
fn get_config_dir() -> Option<PathBuf> {
    // Try XDG config directory on Unix
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join(CONFIG_DIR_NAME));
    }

    // Fallback to ~/.config/attempt-lazy
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join(CONFIG_DIR_NAME));
    }

    // On Windows, try %APPDATA%
    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join(CONFIG_DIR_NAME));
    }

    None
}

/// Get the user config file path
fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Load user-level configuration
/// Returns default config if file doesn't exist
pub fn load_user_config() -> Result<UserConfig, ConfigError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(UserConfig::default()),
    }
}

/// Load configuration from an explicit path
/// Returns default config if file doesn't exist
pub fn load_config_from(path: &Path) -> Result<UserConfig, ConfigError> {
    if !path.exists() {
        debug!("no config at {}, using defaults", path.display());
        return Ok(UserConfig::default());
    }

    let content = fs::read_to_string(path)?;
    debug!("loaded config from {}", path.display());
    Ok(toml::from_str(&content)?)
}

/// Save user-level configuration, returning the file written
pub fn save_user_config(config: &UserConfig) -> Result<PathBuf, ConfigError> {
    let path = get_config_path().ok_or(ConfigError::NoConfigDir)?;
    save_config_to(config, &path)?;
    Ok(path)
}

/// Save configuration to an explicit path, creating parent directories
pub fn save_config_to(
    config: &UserConfig,
    path: &Path,
) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }

    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;

    Ok(())
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Cannot determine config directory")]
    NoConfigDir,
}
