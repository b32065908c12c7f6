//! Configuration handling for the chores CLI
//!
//! Configuration is stored in `config.toml` under the platform config
//! directory (e.g. `~/.config/chores/config.toml` on Linux).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Log file used when neither the flag nor the config names one
pub const DEFAULT_LOG_FILE: &str = "chores.md";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Chore log to use when `--file` is not given
    pub file: Option<PathBuf>,

    /// Default output format (text or json)
    pub default_format: OutputFormat,
}

impl Config {
    /// Returns the config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "chores", "chores").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads configuration from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        match Self::config_dir() {
            Some(dir) => Self::load_from(&dir.join("config.toml")),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.file.as_ref().is_some_and(|f| f.as_os_str().is_empty()) {
            return Err(ConfigError::Invalid("file must not be empty".to_string()));
        }
        Ok(())
    }

    /// Picks the log path: explicit flag, then config, then `chores.md`
    pub fn resolve_log_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.default_format, OutputFormat::Text);
        assert!(config.file.is_none());
    }

    #[test]
    fn parse_config() {
        let toml = r#"
file = "/home/me/chores.md"
default_format = "json"
"#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.default_format, OutputFormat::Json);
        assert_eq!(config.file, Some(PathBuf::from("/home/me/chores.md")));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_format = \"yaml\"").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn empty_file_setting_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "file = \"\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("file must not be empty"));
    }

    #[test]
    fn resolve_log_path_precedence() {
        let mut config = Config::default();
        assert_eq!(config.resolve_log_path(None), PathBuf::from("chores.md"));

        config.file = Some(PathBuf::from("home.md"));
        assert_eq!(config.resolve_log_path(None), PathBuf::from("home.md"));
        assert_eq!(
            config.resolve_log_path(Some(Path::new("flag.md"))),
            PathBuf::from("flag.md")
        );
    }
}
