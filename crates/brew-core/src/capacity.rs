//! # Capacity Calculator
//!
//! Answers "how many cups can I make?" from stock levels alone.
//!
//! ## Flat Per-Cup Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Capacity queries use a generic "average cup":                          │
//! │                                                                         │
//! │      200 ml water  +  50 ml milk  +  15 g beans                         │
//! │                                                                         │
//! │  This is NOT any of the three recipes. Purchases use the recipe table;  │
//! │  capacity queries use these constants. The two must stay separate.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Feasibility Flow
//! ```text
//! requested cups ──► batch_requirement() ──► required {w, m, b}
//!        │                                         │
//!        │                 strict:  required < stock (all three)
//!        │                                         │
//!        └── == 0 ──────────────► feasible ◄───────┘
//!                                    │
//!                 surplus = |requested - min|   (reported when != 0)
//! ```

use serde::{Deserialize, Serialize};

use crate::types::Ingredients;

/// Ingredients of one generic cup, used only by capacity queries.
pub const PER_CUP: Ingredients = Ingredients::new(200, 50, 15);

/// Result of [`capacity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    /// Cups the stock supports under the flat per-cup model.
    pub min: u32,
    /// Distance between the requested count and `min`, as a magnitude.
    pub max: u32,
}

/// Verdict of [`can_make`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feasibility {
    pub feasible: bool,
    /// Cups the stock actually supports.
    pub cap: u32,
    /// Extra cups possible beyond the request; zero unless feasible.
    pub surplus: u32,
}

/// Ingredients required for `cups` generic cups.
///
/// Computed in `u64` so large requests cannot overflow.
///
/// ## Example
/// ```rust
/// use brew_core::capacity::batch_requirement;
///
/// assert_eq!(batch_requirement(5), (1000, 250, 75));
/// ```
pub const fn batch_requirement(cups: u32) -> (u64, u64, u64) {
    let cups = cups as u64;
    (
        cups * PER_CUP.water as u64,
        cups * PER_CUP.milk as u64,
        cups * PER_CUP.beans as u64,
    )
}

/// Computes min/max producible cups for the given stock.
///
/// `min` is the floor of the smallest per-ingredient ratio; `max` is
/// `|requested - min|`.
///
/// ## Example
/// ```rust
/// use brew_core::capacity::{capacity, Capacity};
/// use brew_core::Ingredients;
///
/// let result = capacity(Ingredients::new(2000, 500, 300), 0);
/// assert_eq!(result, Capacity { min: 10, max: 10 });
/// ```
pub fn capacity(stock: Ingredients, requested: u32) -> Capacity {
    let min = (stock.beans / PER_CUP.beans)
        .min(stock.water / PER_CUP.water)
        .min(stock.milk / PER_CUP.milk);

    Capacity {
        min,
        max: requested.abs_diff(min),
    }
}

/// Decides whether `requested` generic cups can be made from `stock`.
///
/// Zero cups are always feasible. Otherwise every required amount must be
/// strictly below the stock level; an exact match is not enough.
///
/// ## Example
/// ```rust
/// use brew_core::capacity::can_make;
/// use brew_core::Ingredients;
///
/// let verdict = can_make(Ingredients::new(400, 540, 120), 5);
/// assert!(!verdict.feasible);
/// assert_eq!(verdict.cap, 2);
/// ```
pub fn can_make(stock: Ingredients, requested: u32) -> Feasibility {
    let (water, milk, beans) = batch_requirement(requested);
    let Capacity { min, max } = capacity(stock, requested);

    let feasible = requested == 0
        || (water < u64::from(stock.water)
            && milk < u64::from(stock.milk)
            && beans < u64::from(stock.beans));

    Feasibility {
        feasible,
        cap: min,
        surplus: if feasible { max } else { 0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_reference_values() {
        let result = capacity(Ingredients::new(2000, 500, 300), 0);
        assert_eq!(result, Capacity { min: 10, max: 10 });
    }

    #[test]
    fn test_capacity_max_is_a_magnitude() {
        let stock = Ingredients::new(2000, 500, 300);
        assert_eq!(capacity(stock, 4).max, 6);
        assert_eq!(capacity(stock, 10).max, 0);
        assert_eq!(capacity(stock, 13).max, 3);
    }

    #[test]
    fn test_capacity_floors_each_ratio() {
        let result = capacity(Ingredients::new(399, 99, 29), 1);
        assert_eq!(result.min, 1);
        assert_eq!(result.max, 0);
    }

    #[test]
    fn test_capacity_empty_stock() {
        assert_eq!(capacity(Ingredients::default(), 3), Capacity { min: 0, max: 3 });
    }

    #[test]
    fn test_can_make_fresh_machine_five_cups() {
        assert_eq!(batch_requirement(5), (1000, 250, 75));

        let verdict = can_make(Ingredients::new(400, 540, 120), 5);
        assert_eq!(
            verdict,
            Feasibility {
                feasible: false,
                cap: 2,
                surplus: 0,
            }
        );
    }

    #[test]
    fn test_can_make_with_surplus() {
        let verdict = can_make(Ingredients::new(2500, 600, 200), 3);
        assert!(verdict.feasible);
        assert_eq!(verdict.cap, 12);
        assert_eq!(verdict.surplus, 9);
    }

    #[test]
    fn test_can_make_exact_fit_without_surplus() {
        // 4 cups need 800/200/60; stock is one unit above each.
        let verdict = can_make(Ingredients::new(801, 201, 61), 4);
        assert!(verdict.feasible);
        assert_eq!(verdict.cap, 4);
        assert_eq!(verdict.surplus, 0);
    }

    #[test]
    fn test_can_make_rejects_exact_stock() {
        // Strict comparison: matching the requirement exactly is refused.
        let verdict = can_make(Ingredients::new(600, 150, 45), 3);
        assert!(!verdict.feasible);
        assert_eq!(verdict.cap, 3);
    }

    #[test]
    fn test_can_make_zero_is_always_feasible() {
        let verdict = can_make(Ingredients::default(), 0);
        assert!(verdict.feasible);
        assert_eq!(verdict.surplus, 0);

        let verdict = can_make(Ingredients::new(400, 540, 120), 0);
        assert!(verdict.feasible);
        assert_eq!(verdict.surplus, 2);
    }

    #[test]
    fn test_can_make_huge_request_does_not_overflow() {
        let verdict = can_make(Ingredients::new(u32::MAX, u32::MAX, u32::MAX), u32::MAX);
        assert!(!verdict.feasible);
    }
}
