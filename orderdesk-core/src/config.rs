use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the order file path
pub const ORDER_FILE_ENV: &str = "ORDERDESK_FILE";

/// Default order file, relative to the working directory
pub const DEFAULT_ORDER_FILE: &str = "order.yml";

/// Settings read from ~/.orderdesk/config.toml
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// Where Save writes and Open reads
    pub order_file: PathBuf,

    /// Log destination (defaults to ~/.orderdesk/orderdesk.log)
    pub log_file: Option<PathBuf>,

    /// Default log filter when RUST_LOG is unset
    pub log_level: Option<String>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            order_file: PathBuf::from(DEFAULT_ORDER_FILE),
            log_file: None,
            log_level: None,
        }
    }
}

impl DeskConfig {
    /// Load config from the default location.
    ///
    /// A missing file yields defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        if config_path.exists() {
            return Self::load_from(&config_path);
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load config from an explicit path, then apply env overrides.
    ///
    /// Fails if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config not found at {:?}", path);
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        let mut config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file (invalid TOML): {:?}", path))?;

        config.apply_env_overrides();
        Ok(config)
    }

    /// Directory holding config and logs: ~/.orderdesk
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".orderdesk")
    }

    /// Get config file path: ~/.orderdesk/config.toml
    pub fn config_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Resolved log file path
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| Self::home_dir().join("orderdesk.log"))
    }

    fn apply_env_overrides(&mut self) {
        if let Some(file) = env::var_os(ORDER_FILE_ENV).filter(|v| !v.is_empty()) {
            self.order_file = PathBuf::from(file);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = DeskConfig::default();
        assert_eq!(config.order_file, PathBuf::from("order.yml"));
        assert_eq!(config.log_file, None);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let err = DeskConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Config not found"));
    }

    #[test]
    fn test_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_level = \"debug\"\n").unwrap();

        let config = DeskConfig::load_from(&path).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "order_file = [").unwrap();

        let err = DeskConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("invalid TOML"));
    }

    #[test]
    fn test_log_path_override() {
        let config = DeskConfig {
            log_file: Some(PathBuf::from("/tmp/desk.log")),
            ..DeskConfig::default()
        };
        assert_eq!(config.log_path(), PathBuf::from("/tmp/desk.log"));
    }
}
