//! # Validation Module
//!
//! Turns raw answers from the session loop into values the core accepts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Session loop                                                 │
//! │  └── Reads one whitespace-separated token per question                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Numeric format                                                    │
//! │  ├── Non-negative                                                      │
//! │  └── Upper bound                                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Core (unsigned fields, checked subtraction)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use brew_core::validation::{parse_amount, parse_selector};
//! use brew_core::Beverage;
//!
//! assert_eq!(parse_amount("water", " 2000 ").unwrap(), 2000);
//! assert!(parse_amount("water", "-5").is_err());
//! assert_eq!(parse_selector("3"), Some(Beverage::Cappuccino));
//! assert_eq!(parse_selector("back"), None);
//! ```

use crate::error::ValidationError;
use crate::types::Beverage;
use crate::MAX_FILL_AMOUNT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parses a non-negative whole number for a fill delta or a cup count.
///
/// ## Rules
/// - Must not be empty
/// - Must be a whole number
/// - Must not be negative
/// - Must not exceed MAX_FILL_AMOUNT
pub fn parse_amount(field: &str, token: &str) -> ValidationResult<u32> {
    let token = token.trim();

    if token.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let value: i64 = token.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a whole number".to_string(),
    })?;

    if value < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    if value > i64::from(MAX_FILL_AMOUNT) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::from(MAX_FILL_AMOUNT),
        });
    }

    // In range after the bound check above.
    Ok(value as u32)
}

/// Parses a menu selector. Anything that is not `1`, `2` or `3` (including
/// `back`) yields `None`, meaning "return to the main menu".
pub fn parse_selector(token: &str) -> Option<Beverage> {
    token
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(Beverage::from_selector)
}
