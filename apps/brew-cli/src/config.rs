//! # Configuration
//!
//! Session settings loaded once at startup. The machine's seed inventory is
//! fixed and deliberately absent from this file.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BREW_LOG=debug                                                     │
//! │     BREW_REPORT_FORMAT=json                                            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $BREW_CONFIG, or                                                   │
//! │     ~/.config/coffee-machine/config.toml (Linux)                       │
//! │     ~/Library/Application Support/com.brew.coffee-machine/ (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     log_filter = "warn", report_format = "text"                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! log_filter = "brew_cli=debug"
//! report_format = "json"
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// How the `remaining` action renders the machine's levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// `The coffee machine has:` followed by one line per resource.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

impl FromStr for ReportFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(CliError::InvalidConfig(format!(
                "unknown report format '{other}' (expected text or json)"
            ))),
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,

    /// Rendering of the `remaining` report.
    pub report_format: ReportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: "warn".to_string(),
            report_format: ReportFormat::Text,
        }
    }
}

impl Config {
    /// Loads configuration from file (if present), then applies environment
    /// overrides and validates.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let mut config = match config_path.or_else(Self::default_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML file, falling back to defaults when it does not exist.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// `$BREW_CONFIG`, else the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("BREW_CONFIG") {
            return Some(PathBuf::from(path));
        }

        ProjectDirs::from("com", "brew", "coffee-machine")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Applies `BREW_*` environment variables on top of the loaded values.
    pub fn apply_env_overrides(&mut self) -> CliResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filter) = lookup("BREW_LOG") {
            debug!(filter = %filter, "Overriding log filter from environment");
            self.log_filter = filter;
        }

        if let Some(format) = lookup("BREW_REPORT_FORMAT") {
            self.report_format = format.parse()?;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        if self.log_filter.trim().is_empty() {
            return Err(CliError::InvalidConfig(
                "log_filter must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.report_format, ReportFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(r#"report_format = "json""#).unwrap();
        assert_eq!(config.report_format, ReportFormat::Json);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(toml::from_str::<Config>(r#"report_format = "yaml""#).is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::from_file(Path::new("/definitely/not/here/config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("BREW_LOG", "debug"), ("BREW_REPORT_FORMAT", "JSON")]);

        let mut config = Config::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.report_format, ReportFormat::Json);
    }

    #[test]
    fn test_bad_env_report_format() {
        let mut config = Config::default();
        let result = config.apply_overrides(|key| {
            (key == "BREW_REPORT_FORMAT").then(|| "xml".to_string())
        });
        assert!(matches!(result, Err(CliError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_log_filter_is_invalid() {
        let config = Config {
            log_filter: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_roundtrips_through_toml() {
        let config = Config {
            log_filter: "brew_cli=debug".to_string(),
            report_format: ReportFormat::Json,
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("report_format = \"json\""));
        assert_eq!(toml::from_str::<Config>(&toml_str).unwrap(), config);
    }
}
