//! # Error Types
//!
//! Domain-specific error types for brew-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  brew-core errors (this file)                                          │
//! │  ├── CoreError        - Purchase refusals + wrapped validation         │
//! │  └── ValidationError  - Boundary input failures                        │
//! │                                                                         │
//! │  brew-cli errors (separate crate)                                      │
//! │  └── CliError         - I/O, config, logging setup                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. A refused purchase names exactly one resource
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::types::Resource;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A purchase was refused because one resource ran short.
    ///
    /// ## When This Occurs
    /// ```text
    /// purchase(latte)
    ///      │
    ///      ▼
    /// cups ok ──► water ok ──► milk short
    ///                              │
    ///                              ▼
    ///               Insufficient(Resource::Milk)
    ///                              │
    ///                              ▼
    ///          UI shows: "Sorry, not enough milk!"
    /// ```
    ///
    /// Only the first short resource in the order cups, water, milk, beans
    /// is reported.
    #[error("not enough {0}")]
    Insufficient(Resource),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised while parsing user answers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// No answer was given.
    #[error("{field} is required")]
    Required { field: String },

    /// The answer is not a whole number.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// The answer is below zero.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// The answer is larger than the machine accepts.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
