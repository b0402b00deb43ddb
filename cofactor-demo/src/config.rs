//! Logging configuration
//!
//! Read from a JSON file (`./config/log.json`, or the path in
//! `COFACTOR_LOG_CONFIG`) and installed as the global `tracing` subscriber.

use std::env;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use cofactor_core::Level;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_ENV: &str = "COFACTOR_LOG_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "./config/log.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid logging configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to install logger: {0}")]
    Install(String),
}

/// Where and how much to log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Lowest level that is written
    pub level: Level,
    /// Append to this file; stderr when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Colored output (stderr only)
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            file: None,
            ansi: false,
        }
    }
}

impl LogConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// Get the config path from environment
pub fn config_path() -> PathBuf {
    env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Install the global subscriber described by `config`
pub fn init_logging(config: &LogConfig) -> Result<(), ConfigError> {
    let level: tracing::Level = config.level.into();

    match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| ConfigError::Io { path: path.clone(), source })?;
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| ConfigError::Install(e.to_string()))
        }
        None => tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(config.ansi)
            .with_writer(io::stderr)
            .try_init()
            .map_err(|e| ConfigError::Install(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_full() {
        let config = LogConfig::from_json(r#"{"level": "warn", "file": "/tmp/x.log", "ansi": true}"#).unwrap();
        assert_eq!(config.level, Level::Warn);
        assert_eq!(config.file, Some(PathBuf::from("/tmp/x.log")));
        assert!(config.ansi);
    }

    #[test]
    fn test_from_json_defaults() {
        let config = LogConfig::from_json(r#"{"level": "debug"}"#).unwrap();
        assert_eq!(config.level, Level::Debug);
        assert_eq!(config.file, None);
        assert!(!config.ansi);

        assert_eq!(LogConfig::from_json("{}").unwrap(), LogConfig::default());
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(LogConfig::from_json(r#"{"level": "loud"}"#), Err(ConfigError::Parse(_))));
        assert!(matches!(LogConfig::from_json("not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let path = env::temp_dir().join("cofactor-missing-config-does-not-exist.json");
        assert_eq!(LogConfig::load(&path).unwrap(), LogConfig::default());
    }

    #[test]
    fn test_load_file() {
        let path = env::temp_dir().join(format!("cofactor-log-config-{}.json", std::process::id()));
        fs::write(&path, r#"{"level": "error"}"#).unwrap();

        let config = LogConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.level, Level::Error);
    }
}
