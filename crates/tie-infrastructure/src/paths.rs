//! Path management for TIE configuration and question data.
//!
//! ```text
//! ~/.config/tie/              # Config directory
//! ├── config.toml             # Application configuration
//! └── questions/              # Default question directory
//!     ├── isBalanced.json
//!     └── reverseWords.toml
//! ```

use std::path::PathBuf;
use tie_core::{Result, TieError};

const APP_DIR_NAME: &str = "tie";

pub struct TiePaths;

impl TiePaths {
    /// Returns the TIE configuration directory (e.g., `~/.config/tie/`).
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory
    /// - `Err(TieError::Config)`: The platform config directory could not be determined
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| TieError::config("Cannot find config directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the default question directory, used when the config names none.
    pub fn questions_dir() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("questions"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Results depend on whether the host exposes a config directory (HOME or
    // XDG_CONFIG_HOME); both outcomes are checked against `dirs` directly.

    #[test]
    fn test_config_dir() {
        match (dirs::config_dir(), TiePaths::config_dir()) {
            (Some(base), Ok(config_dir)) => {
                assert!(config_dir.ends_with("tie"));
                assert!(config_dir.starts_with(&base));
            }
            (None, Err(err)) => assert!(matches!(err, TieError::Config(_))),
            (base, result) => panic!("mismatch: base {:?}, resolved {:?}", base, result),
        }
    }

    #[test]
    fn test_config_file() {
        match TiePaths::config_file() {
            Ok(config_file) => {
                assert!(config_file.ends_with("config.toml"));
                let config_dir = TiePaths::config_dir().unwrap();
                assert!(config_file.starts_with(&config_dir));
            }
            Err(err) => {
                assert!(dirs::config_dir().is_none());
                assert!(matches!(err, TieError::Config(_)));
            }
        }
    }

    #[test]
    fn test_questions_dir() {
        match TiePaths::questions_dir() {
            Ok(questions_dir) => {
                assert!(questions_dir.ends_with("questions"));
                let config_dir = TiePaths::config_dir().unwrap();
                assert!(questions_dir.starts_with(&config_dir));
            }
            Err(err) => {
                assert!(dirs::config_dir().is_none());
                assert!(matches!(err, TieError::Config(_)));
            }
        }
    }
}
