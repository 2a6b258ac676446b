//! # Configuration
//!
//! Optional settings read from `config.json`. A missing file means defaults.
//!
//! ## Location
//!
//! 1. `$USERLIST_CONFIG_DIR/config.json` when the variable is set
//! 2. The OS config directory (via the `directories` crate), e.g.
//!    `~/.config/userlist/config.json` on Linux
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `file_mode` | `420` (`0o644`) | Permission bits for newly created data files |
//! | `log_filter` | `"warn"` | `tracing` filter used when `RUST_LOG` is unset |

use crate::error::{Result, UserlistError};
use crate::store::fs::DEFAULT_FILE_MODE;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_FILTER: &str = "warn";
pub const CONFIG_DIR_ENV: &str = "USERLIST_CONFIG_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserlistConfig {
    /// Permission bits used when the data file is created
    #[serde(default = "default_file_mode")]
    pub file_mode: u32,

    /// Log filter directive, e.g. "warn" or "userlist=debug"
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_file_mode() -> u32 {
    DEFAULT_FILE_MODE
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for UserlistConfig {
    fn default() -> Self {
        Self {
            file_mode: DEFAULT_FILE_MODE,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl UserlistConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            UserlistError::Config(format!("cannot read {}: {}", config_path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            UserlistError::Config(format!("invalid {}: {}", config_path.display(), e))
        })
    }

    /// Load from the default location, falling back to defaults when no
    /// config directory can be determined.
    pub fn load_default() -> Result<Self> {
        match default_config_dir() {
            Some(dir) => Self::load(dir),
            None => Ok(Self::default()),
        }
    }
}

pub fn default_config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "userlist", "userlist").map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UserlistConfig::default();
        assert_eq!(config.file_mode, 0o644);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = UserlistConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, UserlistConfig::default());
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"file_mode": 384}"#).unwrap();

        let config = UserlistConfig::load(temp_dir.path()).unwrap();

        assert_eq!(config.file_mode, 0o600);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_load_malformed_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{nope").unwrap();

        let err = UserlistConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, UserlistError::Config(_)));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = UserlistConfig {
            file_mode: 0o640,
            log_filter: "userlist=debug".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: UserlistConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
