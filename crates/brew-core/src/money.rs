//! # Money Module
//!
//! Provides the `Money` type for the machine's cash box and beverage prices.
//!
//! ## Whole Units Only
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The machine prices everything in whole currency units:                 │
//! │                                                                         │
//! │    espresso $4   latte $7   cappuccino $6                               │
//! │                                                                         │
//! │  There are no minor units, no rounding and no currency conversion.      │
//! │  Money is a newtype so a price can never be mixed up with millilitres.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use brew_core::money::Money;
//!
//! let mut cash_box = Money::from_units(550);
//! cash_box += Money::from_units(4);
//! assert_eq!(cash_box.units(), 554);
//! assert_eq!(cash_box.to_string(), "$554");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: Subtraction stays total; the inventory itself never
///   goes below zero because the only debit is a full withdrawal
/// - **Transparent serde**: Serializes as a bare integer in snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole units.
    ///
    /// ## Example
    /// ```rust
    /// use brew_core::money::Money;
    ///
    /// let price = Money::from_units(7);
    /// assert_eq!(price.units(), 7);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the amount in whole units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `$550`, or `-$4` for negative amounts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}", sign, self.0.unsigned_abs())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(550);
        assert_eq!(money.units(), 550);
        assert!(!money.is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_units(550)), "$550");
        assert_eq!(format!("{}", Money::from_units(0)), "$0");
        assert_eq!(format!("{}", Money::from_units(-4)), "-$4");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(10);
        let b = Money::from_units(4);

        assert_eq!((a + b).units(), 14);
        assert_eq!((a - b).units(), 6);

        let mut c = a;
        c += b;
        c -= Money::from_units(14);
        assert!(c.is_zero());
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Money::default(), Money::zero());
    }
}
