//! # CLI Error Types
//!
//! Errors that can stop the session. Refused purchases and rejected answers
//! are NOT errors at this level: the session prints them and carries on.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Failures outside the coffee machine's own domain.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file exists but is not valid TOML for [`crate::config::Config`].
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A config value was rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A JSON report could not be rendered.
    #[error("Failed to render report: {0}")]
    Report(#[from] serde_json::Error),

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
