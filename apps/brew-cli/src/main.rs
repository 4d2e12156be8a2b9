//! # Coffee Machine Entry Point
//!
//! The actual setup lives in `lib.rs` for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match brew_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("coffee-machine: {e}");
            ExitCode::FAILURE
        }
    }
}
