//! Application configuration loaded from `config.toml`.

use crate::paths::TiePaths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tie_core::Result;

/// Runtime configuration for the TIE tools.
///
/// Every field has a default, so a partial or missing file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TieConfig {
    /// Directory holding question definition files.
    pub question_dir: PathBuf,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for TieConfig {
    fn default() -> Self {
        Self {
            question_dir: TiePaths::questions_dir().unwrap_or_else(|_| PathBuf::from("questions")),
            log_filter: "info".to_string(),
        }
    }
}

impl TieConfig {
    /// Loads the config from the default path (`~/.config/tie/config.toml`).
    pub fn load_default() -> Result<Self> {
        Self::load_from(&TiePaths::config_file()?)
    }

    /// Loads the config from `path`.
    ///
    /// # Returns
    ///
    /// - `Ok(TieConfig)`: Parsed config, or defaults if the file is missing or empty
    /// - `Err(TieError::Serialization)`: The file exists but is not valid TOML
    /// - `Err(TieError::Io)`: The file exists but cannot be read
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            tracing::debug!("Config file {:?} is empty, using defaults", path);
            return Ok(Self::default());
        }

        let config: TieConfig = toml::from_str(&content)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Renders the config as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
