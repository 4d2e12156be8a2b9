//! # brew-core: Pure Business Logic for the Coffee Machine
//!
//! This crate holds the machine's resource accounting as plain functions and
//! values with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Coffee Machine                                  │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 brew-cli (Session Loop)                         │   │
//! │  │    buy ── fill ── take ── remaining ── estimate ── exit        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ validated integers                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ brew-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌─────────────┐  ┌──────────┐  │   │
//! │  │   │  recipe   │  │ inventory │  │ transaction │  │ capacity │  │   │
//! │  │   │  catalog  │  │  levels   │  │  purchase   │  │ can_make │  │   │
//! │  │   └───────────┘  └───────────┘  └─────────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • DETERMINISTIC                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Beverage, Ingredients, Resource, Snapshot, Brew
//! - [`money`] - Money type in whole currency units
//! - [`recipe`] - Fixed recipe table
//! - [`inventory`] - Stock levels and the cash box
//! - [`transaction`] - Check-and-deduct purchase
//! - [`capacity`] - Cup capacity and feasibility queries
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary input parsing
//!
//! ## Example Usage
//!
//! ```rust
//! use brew_core::{purchase, Beverage, CoreError, Inventory, Resource};
//!
//! let mut inventory = Inventory::seeded();
//! inventory.fill(0, 0, 0, 0);
//!
//! purchase(&mut inventory, Beverage::Latte).unwrap();
//! assert_eq!(
//!     purchase(&mut inventory, Beverage::Latte),
//!     Err(CoreError::Insufficient(Resource::Water))
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod capacity;
pub mod error;
pub mod inventory;
pub mod money;
pub mod recipe;
pub mod transaction;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use capacity::{can_make, capacity, Capacity, Feasibility};
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use money::Money;
pub use recipe::{recipe_for, Recipe};
pub use transaction::purchase;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest single answer accepted for a fill delta or a cup count.
///
/// ## Business Reason
/// Catches typos (an extra zero or five) before they reach the tanks.
pub const MAX_FILL_AMOUNT: u32 = 1_000_000;
