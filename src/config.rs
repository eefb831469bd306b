//! Configuration handling for tasklist
//!
//! Configuration is read from `--config <path>`, `$TASKLIST_CONFIG`, or
//! `~/.config/tasklist/config.toml` (platform equivalent). A missing file
//! means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Filter, InsertPosition};

#[derive(Debug, Error)]
pub enum ConfigError {
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

/// Settings for the interactive terminal UI
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TuiConfig {
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,

    /// Ask before deleting a task
    pub confirm_delete: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            confirm_delete: true,
        }
    }
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Where new tasks are inserted
    pub insert_position: InsertPosition,

    /// Filter selected when a session starts
    pub default_filter: Filter,

    /// Default output format (text or json)
    pub default_format: OutputFormat,

    /// Terminal UI settings
    pub tui: TuiConfig,
}

impl Config {
    /// Returns the default config file location, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "tasklist", "tasklist")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Picks the explicit path if given, otherwise the default location
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit.map(Path::to_path_buf).or_else(Self::default_path)
    }

    /// Loads configuration from `explicit` or the default location
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match Self::resolve_path(explicit) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file; missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Parses configuration from TOML text
    pub fn parse(content: &str) -> std::result::Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serializes the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_eq!(config.insert_position, InsertPosition::Prepend);
        assert_eq!(config.default_filter, Filter::All);
        assert_eq!(config.default_format, OutputFormat::Text);
        assert_eq!(config.tui.tick_rate_ms, 250);
        assert!(config.tui.confirm_delete);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
insert_position = "append"
default_filter = "active"
default_format = "json"

[tui]
tick_rate_ms = 100
confirm_delete = false
"#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.insert_position, InsertPosition::Append);
        assert_eq!(config.default_filter, Filter::Active);
        assert_eq!(config.default_format, OutputFormat::Json);
        assert_eq!(config.tui.tick_rate_ms, 100);
        assert!(!config.tui.confirm_delete);
    }

    #[test]
    fn parse_partial_config_keeps_defaults() {
        let config = Config::parse("default_filter = \"completed\"\n").unwrap();

        assert_eq!(config.default_filter, Filter::Completed);
        assert_eq!(config.insert_position, InsertPosition::Prepend);
        assert_eq!(config.tui, TuiConfig::default());
    }

    #[test]
    fn parse_invalid_value() {
        let result = Config::parse("insert_position = \"middle\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "insert_position = \"append\"\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.insert_position, InsertPosition::Append);
    }

    #[test]
    fn load_reports_path_on_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_filter = 3\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("config.toml"));
    }

    #[test]
    fn explicit_path_wins() {
        let path = PathBuf::from("/tmp/custom.toml");
        assert_eq!(Config::resolve_path(Some(path.as_path())), Some(path));
    }

    #[test]
    fn toml_roundtrip() {
        let config = Config {
            insert_position: InsertPosition::Append,
            ..Config::default()
        };

        let text = config.to_toml().unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
    }
}
