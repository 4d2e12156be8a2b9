//! # Brew CLI Library
//!
//! Wiring for the `coffee-machine` binary.
//!
//! ## Module Organization
//! ```text
//! brew_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── TOML + environment configuration
//! ├── session.rs      ◄─── Interactive command loop
//! ├── report.rs       ◄─── Text rendering of results
//! └── error.rs        ◄─── CLI error type
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod session;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use error::{CliError, CliResult};
use session::Session;

/// Runs one interactive session on stdin/stdout.
///
/// ## Startup Sequence
/// 1. Load configuration (file, then `BREW_*` overrides)
/// 2. Initialize logging to stderr
/// 3. Seed the machine and enter the command loop
pub fn run() -> CliResult<()> {
    let config = Config::load(None)?;
    init_tracing(&config)?;

    info!(report_format = ?config.report_format, "Starting coffee machine");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Session::new(stdin, stdout, config.report_format).run()?;

    info!("Coffee machine stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr; stdout carries only the machine's conversation.
fn init_tracing(config: &Config) -> CliResult<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| CliError::InvalidConfig(format!("log_filter: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
