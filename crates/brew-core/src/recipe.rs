//! # Recipe Catalog
//!
//! Fixed ingredient requirements and price for each beverage.
//!
//! ```text
//! ┌──────────────┬────────┬───────┬───────┬───────┐
//! │ beverage     │ water  │ milk  │ beans │ price │
//! ├──────────────┼────────┼───────┼───────┼───────┤
//! │ espresso     │ 250 ml │  0 ml │ 16 g  │  $4   │
//! │ latte        │ 350 ml │ 75 ml │ 20 g  │  $7   │
//! │ cappuccino   │ 200 ml │100 ml │ 12 g  │  $6   │
//! └──────────────┴────────┴───────┴───────┴───────┘
//! ```

use serde::Serialize;

use crate::money::Money;
use crate::types::{Beverage, Ingredients};

/// What one cup of a beverage consumes and costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub beverage: Beverage,
    pub ingredients: Ingredients,
    pub price: Money,
}

const ESPRESSO: Recipe = Recipe {
    beverage: Beverage::Espresso,
    ingredients: Ingredients::new(250, 0, 16),
    price: Money::from_units(4),
};

const LATTE: Recipe = Recipe {
    beverage: Beverage::Latte,
    ingredients: Ingredients::new(350, 75, 20),
    price: Money::from_units(7),
};

const CAPPUCCINO: Recipe = Recipe {
    beverage: Beverage::Cappuccino,
    ingredients: Ingredients::new(200, 100, 12),
    price: Money::from_units(6),
};

/// Looks up the recipe for a beverage.
///
/// ## Example
/// ```rust
/// use brew_core::{recipe_for, Beverage};
///
/// let latte = recipe_for(Beverage::Latte);
/// assert_eq!(latte.ingredients.milk, 75);
/// assert_eq!(latte.price.units(), 7);
/// ```
pub const fn recipe_for(beverage: Beverage) -> &'static Recipe {
    match beverage {
        Beverage::Espresso => &ESPRESSO,
        Beverage::Latte => &LATTE,
        Beverage::Cappuccino => &CAPPUCCINO,
    }
}
