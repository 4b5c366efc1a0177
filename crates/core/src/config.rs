//! Configuration for nadbench.
//!
//! Config priority: $NADBENCH_CONFIG_DIR/config.toml > $XDG_CONFIG_HOME/nadbench/config.toml
//! > platform config dir. A missing or malformed file falls back to defaults.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
  /// Event-loop tick interval in milliseconds; drives toast expiry checks
  pub tick_rate_ms: u64,
}

impl Default for UiConfig {
  fn default() -> Self {
    Self { tick_rate_ms: 250 }
  }
}

/// nadbench configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  #[serde(default)]
  pub ui: UiConfig,
}

impl Config {
  /// Parse a TOML config document
  pub fn parse(content: &str) -> Result<Self> {
    toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
  }

  /// Read and parse a config file
  pub fn load_file(path: &Path) -> Result<Self> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    Self::parse(&content)
  }

  /// Load the user config, falling back to defaults when absent or invalid
  pub fn load() -> Self {
    if let Some(path) = Self::user_config_path()
      && path.exists()
      && let Ok(config) = Self::load_file(&path)
    {
      return config;
    }
    Self::default()
  }

  /// Get the user-level config path
  pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("NADBENCH_CONFIG_DIR") {
      return Some(PathBuf::from(path).join("config.toml"));
    }

    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
      return Some(PathBuf::from(path).join("nadbench").join("config.toml"));
    }

    dirs::config_dir().map(|p: PathBuf| p.join("nadbench").join("config.toml"))
  }
}
