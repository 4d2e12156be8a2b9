//! # Domain Types
//!
//! Core domain types shared by the recipe catalog, the inventory and the
//! transaction engine.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Beverage     │   │  Ingredients    │   │    Resource     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Espresso  (1)  │   │  water  (ml)    │   │  Cups           │       │
//! │  │  Latte     (2)  │   │  milk   (ml)    │   │  Water          │       │
//! │  │  Cappuccino(3)  │   │  beans  (g)     │   │  Milk / Beans   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Snapshot     │   │      Brew       │                             │
//! │  │  read-only view │   │  served receipt │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Beverage
// =============================================================================

/// The three beverages the machine can brew.
///
/// A closed set: the boundary maps user input onto it, so the core never
/// sees an unknown beverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Beverage {
    Espresso,
    Latte,
    Cappuccino,
}

impl Beverage {
    /// All beverages, in menu order.
    pub const ALL: [Beverage; 3] = [Beverage::Espresso, Beverage::Latte, Beverage::Cappuccino];

    /// Maps a menu number onto a beverage.
    ///
    /// ## Example
    /// ```rust
    /// use brew_core::Beverage;
    ///
    /// assert_eq!(Beverage::from_selector(2), Some(Beverage::Latte));
    /// assert_eq!(Beverage::from_selector(0), None);
    /// ```
    pub const fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(Beverage::Espresso),
            2 => Some(Beverage::Latte),
            3 => Some(Beverage::Cappuccino),
            _ => None,
        }
    }

    /// Lowercase display name, as used in the menu.
    pub const fn name(&self) -> &'static str {
        match self {
            Beverage::Espresso => "espresso",
            Beverage::Latte => "latte",
            Beverage::Cappuccino => "cappuccino",
        }
    }
}

impl fmt::Display for Beverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Ingredients
// =============================================================================

/// A quantity of each consumable ingredient.
///
/// Used for recipe requirements, for stock levels handed to the capacity
/// calculator, and for batch requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ingredients {
    /// Water in millilitres.
    pub water: u32,
    /// Milk in millilitres.
    pub milk: u32,
    /// Coffee beans in grams.
    pub beans: u32,
}

impl Ingredients {
    #[inline]
    pub const fn new(water: u32, milk: u32, beans: u32) -> Self {
        Ingredients { water, milk, beans }
    }
}

// =============================================================================
// Resource
// =============================================================================

/// A resource whose shortage can stop a purchase.
///
/// Declared in check order: cups first, then water, milk, beans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Cups,
    Water,
    Milk,
    Beans,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Cups => "disposable cups",
            Resource::Water => "water",
            Resource::Milk => "milk",
            Resource::Beans => "beans",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Read-only copy of every inventory level, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub water: u32,
    pub milk: u32,
    pub beans: u32,
    pub cups: u32,
    pub money: Money,
}

impl Snapshot {
    /// The ingredient part of the snapshot (no cups, no money).
    #[inline]
    pub const fn ingredients(&self) -> Ingredients {
        Ingredients::new(self.water, self.milk, self.beans)
    }
}

// =============================================================================
// Brew
// =============================================================================

/// Receipt for a served beverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brew {
    pub beverage: Beverage,
    /// Amount credited to the cash box.
    pub price: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_mapping() {
        assert_eq!(Beverage::from_selector(1), Some(Beverage::Espresso));
        assert_eq!(Beverage::from_selector(2), Some(Beverage::Latte));
        assert_eq!(Beverage::from_selector(3), Some(Beverage::Cappuccino));
        assert_eq!(Beverage::from_selector(4), None);
        assert_eq!(Beverage::from_selector(-1), None);
    }

    #[test]
    fn test_resource_display() {
        assert_eq!(Resource::Cups.to_string(), "disposable cups");
        assert_eq!(Resource::Beans.to_string(), "beans");
    }

    #[test]
    fn test_snapshot_serializes_flat() {
        let snapshot = Snapshot {
            water: 400,
            milk: 540,
            beans: 120,
            cups: 9,
            money: Money::from_units(550),
        };
        let json = serde_json::to_value(snapshot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "water": 400,
                "milk": 540,
                "beans": 120,
                "cups": 9,
                "money": 550
            })
        );
    }
}
