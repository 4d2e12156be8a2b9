//! # Inventory
//!
//! The machine's current stock: water, milk, beans, disposable cups and the
//! cash box.
//!
//! ## Mutation Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  fill(w, m, b, c) ─────► water/milk/beans/cups += delta                 │
//! │                                                                         │
//! │  purchase(kind) ───────► ingredients -= recipe, cups -= 1, money += $   │
//! │  (transaction engine)                                                   │
//! │                                                                         │
//! │  take_money() ─────────► money = 0                                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Levels are unsigned, so no field can go negative. Debits are only
//! reachable through the transaction engine, which checks before it
//! subtracts.

use crate::money::Money;
use crate::types::{Ingredients, Snapshot};

/// Water in the tank at start-up (ml).
pub const SEED_WATER: u32 = 400;
/// Milk in the tank at start-up (ml).
pub const SEED_MILK: u32 = 540;
/// Beans in the hopper at start-up (g).
pub const SEED_BEANS: u32 = 120;
/// Disposable cups at start-up.
pub const SEED_CUPS: u32 = 9;
/// Cash in the box at start-up.
pub const SEED_MONEY: Money = Money::from_units(550);

/// Mutable resource levels, owned by a single session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    pub(crate) water: u32,
    pub(crate) milk: u32,
    pub(crate) beans: u32,
    pub(crate) cups: u32,
    pub(crate) money: Money,
}

impl Inventory {
    /// Creates an inventory with explicit levels.
    pub const fn new(stock: Ingredients, cups: u32, money: Money) -> Self {
        Inventory {
            water: stock.water,
            milk: stock.milk,
            beans: stock.beans,
            cups,
            money,
        }
    }

    /// The fixed start-up inventory.
    ///
    /// ## Example
    /// ```rust
    /// use brew_core::Inventory;
    ///
    /// let snapshot = Inventory::seeded().snapshot();
    /// assert_eq!(snapshot.water, 400);
    /// assert_eq!(snapshot.cups, 9);
    /// assert_eq!(snapshot.money.units(), 550);
    /// ```
    pub const fn seeded() -> Self {
        Inventory::new(
            Ingredients::new(SEED_WATER, SEED_MILK, SEED_BEANS),
            SEED_CUPS,
            SEED_MONEY,
        )
    }

    #[inline]
    pub const fn water(&self) -> u32 {
        self.water
    }

    #[inline]
    pub const fn milk(&self) -> u32 {
        self.milk
    }

    #[inline]
    pub const fn beans(&self) -> u32 {
        self.beans
    }

    #[inline]
    pub const fn cups(&self) -> u32 {
        self.cups
    }

    #[inline]
    pub const fn money(&self) -> Money {
        self.money
    }

    /// Current ingredient levels.
    #[inline]
    pub const fn ingredients(&self) -> Ingredients {
        Ingredients::new(self.water, self.milk, self.beans)
    }

    /// Read-only copy of every level.
    pub const fn snapshot(&self) -> Snapshot {
        Snapshot {
            water: self.water,
            milk: self.milk,
            beans: self.beans,
            cups: self.cups,
            money: self.money,
        }
    }

    /// Adds stock. Purely additive; each delta touches only its own field.
    ///
    /// Saturates at `u32::MAX` rather than wrapping.
    pub fn fill(&mut self, water: u32, milk: u32, beans: u32, cups: u32) {
        self.water = self.water.saturating_add(water);
        self.milk = self.milk.saturating_add(milk);
        self.beans = self.beans.saturating_add(beans);
        self.cups = self.cups.saturating_add(cups);
    }

    /// Empties the cash box and returns what was in it.
    ///
    /// ## Example
    /// ```rust
    /// use brew_core::Inventory;
    ///
    /// let mut inventory = Inventory::seeded();
    /// assert_eq!(inventory.take_money().units(), 550);
    /// assert!(inventory.money().is_zero());
    /// ```
    pub fn take_money(&mut self) -> Money {
        std::mem::take(&mut self.money)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_levels() {
        let snapshot = Inventory::seeded().snapshot();
        assert_eq!(
            snapshot,
            Snapshot {
                water: 400,
                milk: 540,
                beans: 120,
                cups: 9,
                money: Money::from_units(550),
            }
        );
    }

    #[test]
    fn test_fill_is_additive_per_field() {
        let mut inventory = Inventory::seeded();
        let before = inventory.snapshot();

        inventory.fill(2000, 500, 100, 10);

        let after = inventory.snapshot();
        assert_eq!(after.water, before.water + 2000);
        assert_eq!(after.milk, before.milk + 500);
        assert_eq!(after.beans, before.beans + 100);
        assert_eq!(after.cups, before.cups + 10);
        assert_eq!(after.money, before.money);
    }

    #[test]
    fn test_fill_single_field() {
        let mut inventory = Inventory::seeded();
        inventory.fill(0, 0, 0, 1);

        let after = inventory.snapshot();
        assert_eq!(after.cups, 10);
        assert_eq!(after.ingredients(), Ingredients::new(400, 540, 120));
    }

    #[test]
    fn test_fill_saturates() {
        let mut inventory = Inventory::new(Ingredients::new(u32::MAX - 1, 0, 0), 0, Money::zero());
        inventory.fill(10, 0, 0, 0);
        assert_eq!(inventory.water(), u32::MAX);
    }

    #[test]
    fn test_take_money_is_total() {
        let mut inventory = Inventory::seeded();

        assert_eq!(inventory.take_money(), Money::from_units(550));
        assert_eq!(inventory.snapshot().money, Money::zero());
        assert_eq!(inventory.take_money(), Money::zero());
    }
}
