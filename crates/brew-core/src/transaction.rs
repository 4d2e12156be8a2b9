//! # Transaction Engine
//!
//! Turns a beverage request into either a served cup or exactly one
//! shortage.
//!
//! ## Check Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  purchase(kind)                                                         │
//! │                                                                         │
//! │  cups < 1 ? ─── yes ──► Insufficient(Cups)     nothing touched          │
//! │      │ no                                                               │
//! │  water short ? ─ yes ─► Insufficient(Water)    nothing touched          │
//! │      │ no: water -= recipe.water                                        │
//! │  milk short ? ── yes ─► Insufficient(Milk)     water already spent      │
//! │      │ no: milk -= recipe.milk                                          │
//! │  beans short ? ─ yes ─► Insufficient(Beans)    water, milk spent        │
//! │      │ no: beans -= recipe.beans                                        │
//! │  cups -= 1, money += price ──► Ok(Brew)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Partial Deduction
//! Each ingredient is committed as soon as it passes its check. A later
//! shortage does NOT restore earlier ingredients: a latte refused for lack of
//! milk has still drawn its water. Callers must not assume rollback.

use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;
use crate::recipe::recipe_for;
use crate::types::{Beverage, Brew, Resource};

/// Brews one cup of `beverage` from `inventory`.
///
/// ## Returns
/// - `Ok(Brew)` when served: one cup used and the price credited
/// - `Err(CoreError::Insufficient(_))` naming the first short resource
///
/// ## Example
/// ```rust
/// use brew_core::{purchase, Beverage, Inventory};
///
/// let mut inventory = Inventory::seeded();
/// let brew = purchase(&mut inventory, Beverage::Espresso).unwrap();
/// assert_eq!(brew.price.units(), 4);
///
/// let snapshot = inventory.snapshot();
/// assert_eq!((snapshot.water, snapshot.beans, snapshot.cups), (150, 104, 8));
/// assert_eq!(snapshot.money.units(), 554);
/// ```
pub fn purchase(inventory: &mut Inventory, beverage: Beverage) -> CoreResult<Brew> {
    let recipe = recipe_for(beverage);
    let needed = recipe.ingredients;

    if inventory.cups < 1 {
        return Err(CoreError::Insufficient(Resource::Cups));
    }

    inventory.water = inventory
        .water
        .checked_sub(needed.water)
        .ok_or(CoreError::Insufficient(Resource::Water))?;

    inventory.milk = inventory
        .milk
        .checked_sub(needed.milk)
        .ok_or(CoreError::Insufficient(Resource::Milk))?;

    inventory.beans = inventory
        .beans
        .checked_sub(needed.beans)
        .ok_or(CoreError::Insufficient(Resource::Beans))?;

    inventory.cups -= 1;
    inventory.money += recipe.price;

    Ok(Brew {
        beverage,
        price: recipe.price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{Ingredients, Snapshot};

    fn stocked(water: u32, milk: u32, beans: u32, cups: u32) -> Inventory {
        Inventory::new(Ingredients::new(water, milk, beans), cups, Money::zero())
    }

    #[test]
    fn test_exact_recipe_is_served_for_every_beverage() {
        for beverage in Beverage::ALL {
            let recipe = recipe_for(beverage);
            let needed = recipe.ingredients;
            let mut inventory = stocked(needed.water, needed.milk, needed.beans, 1);

            let brew = purchase(&mut inventory, beverage).unwrap();

            assert_eq!(brew.beverage, beverage);
            assert_eq!(brew.price, recipe.price);
            assert_eq!(
                inventory.snapshot(),
                Snapshot {
                    water: 0,
                    milk: 0,
                    beans: 0,
                    cups: 0,
                    money: recipe.price,
                }
            );
        }
    }

    #[test]
    fn test_fresh_machine_espresso() {
        let mut inventory = Inventory::seeded();

        purchase(&mut inventory, Beverage::Espresso).unwrap();

        assert_eq!(
            inventory.snapshot(),
            Snapshot {
                water: 150,
                milk: 540,
                beans: 104,
                cups: 8,
                money: Money::from_units(554),
            }
        );
    }

    #[test]
    fn test_no_cups_wins_over_everything() {
        let mut inventory = stocked(0, 0, 0, 0);
        assert_eq!(
            purchase(&mut inventory, Beverage::Latte),
            Err(CoreError::Insufficient(Resource::Cups))
        );

        let mut inventory = stocked(10_000, 10_000, 10_000, 0);
        let before = inventory.clone();
        assert_eq!(
            purchase(&mut inventory, Beverage::Cappuccino),
            Err(CoreError::Insufficient(Resource::Cups))
        );
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_short_water_touches_nothing() {
        let mut inventory = stocked(349, 1000, 1000, 5);
        let before = inventory.clone();

        assert_eq!(
            purchase(&mut inventory, Beverage::Latte),
            Err(CoreError::Insufficient(Resource::Water))
        );
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_short_milk_keeps_water_deduction() {
        let mut inventory = stocked(400, 74, 100, 5);

        assert_eq!(
            purchase(&mut inventory, Beverage::Latte),
            Err(CoreError::Insufficient(Resource::Milk))
        );

        let snapshot = inventory.snapshot();
        assert_eq!(snapshot.water, 50);
        assert_eq!(snapshot.milk, 74);
        assert_eq!(snapshot.beans, 100);
        assert_eq!(snapshot.cups, 5);
        assert!(snapshot.money.is_zero());
    }

    #[test]
    fn test_short_beans_keeps_water_and_milk_deductions() {
        let mut inventory = stocked(200, 100, 11, 2);

        assert_eq!(
            purchase(&mut inventory, Beverage::Cappuccino),
            Err(CoreError::Insufficient(Resource::Beans))
        );

        let snapshot = inventory.snapshot();
        assert_eq!(snapshot.ingredients(), Ingredients::new(0, 0, 11));
        assert_eq!(snapshot.cups, 2);
        assert!(snapshot.money.is_zero());
    }

    #[test]
    fn test_espresso_needs_no_milk() {
        let mut inventory = stocked(250, 0, 16, 1);
        assert!(purchase(&mut inventory, Beverage::Espresso).is_ok());
    }

    #[test]
    fn test_repeated_purchases_drain_water() {
        let mut inventory = Inventory::seeded();

        assert!(purchase(&mut inventory, Beverage::Cappuccino).is_ok());
        assert!(purchase(&mut inventory, Beverage::Cappuccino).is_ok());
        assert_eq!(
            purchase(&mut inventory, Beverage::Cappuccino),
            Err(CoreError::Insufficient(Resource::Water))
        );

        let snapshot = inventory.snapshot();
        assert_eq!(snapshot.cups, 7);
        assert_eq!(snapshot.money, Money::from_units(562));
    }
}
