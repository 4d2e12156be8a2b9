//! Text rendering for the session's answers.

use brew_core::capacity::batch_requirement;
use brew_core::{CoreError, Feasibility, Snapshot};

use crate::config::ReportFormat;
use crate::error::CliResult;

/// Renders the `remaining` report.
pub fn levels(snapshot: &Snapshot, format: ReportFormat) -> CliResult<String> {
    match format {
        ReportFormat::Text => Ok(format!(
            "The coffee machine has:\n\
             {} ml of water\n\
             {} ml of milk\n\
             {} g of coffee beans\n\
             {} disposable cups\n\
             {} of money",
            snapshot.water, snapshot.milk, snapshot.beans, snapshot.cups, snapshot.money
        )),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(snapshot)?),
    }
}

/// Ingredients needed for `cups` generic cups.
pub fn requirement(cups: u32) -> String {
    let (water, milk, beans) = batch_requirement(cups);
    format!(
        "For {cups} cups of coffee you will need:\n\
         {water} ml of water\n\
         {milk} ml of milk\n\
         {beans} g of coffee beans"
    )
}

/// The yes/no answer to an estimate.
pub fn verdict(feasibility: &Feasibility) -> String {
    match feasibility {
        Feasibility {
            feasible: true,
            surplus: 0,
            ..
        } => "Yes, I can make that amount of coffee".to_string(),
        Feasibility {
            feasible: true,
            surplus,
            ..
        } => format!("Yes, I can make that amount of coffee (and even {surplus} more than that)"),
        Feasibility { cap, .. } => format!("No, I can make only {cap} cups of coffee"),
    }
}

/// Apology for a refused purchase.
pub fn refusal(err: &CoreError) -> String {
    format!("Sorry, {err}!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use brew_core::{Inventory, Resource};

    #[test]
    fn test_text_levels() {
        let text = levels(&Inventory::seeded().snapshot(), ReportFormat::Text).unwrap();
        assert_eq!(
            text,
            "The coffee machine has:\n400 ml of water\n540 ml of milk\n120 g of coffee beans\n9 disposable cups\n$550 of money"
        );
    }

    #[test]
    fn test_json_levels() {
        let json = levels(&Inventory::seeded().snapshot(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["water"], 400);
        assert_eq!(value["money"], 550);
    }

    #[test]
    fn test_requirement() {
        assert_eq!(
            requirement(5),
            "For 5 cups of coffee you will need:\n1000 ml of water\n250 ml of milk\n75 g of coffee beans"
        );
    }

    #[test]
    fn test_verdicts() {
        let yes = Feasibility { feasible: true, cap: 4, surplus: 0 };
        let more = Feasibility { feasible: true, cap: 12, surplus: 9 };
        let no = Feasibility { feasible: false, cap: 2, surplus: 0 };

        assert_eq!(verdict(&yes), "Yes, I can make that amount of coffee");
        assert_eq!(
            verdict(&more),
            "Yes, I can make that amount of coffee (and even 9 more than that)"
        );
        assert_eq!(verdict(&no), "No, I can make only 2 cups of coffee");
    }

    #[test]
    fn test_refusal() {
        assert_eq!(
            refusal(&CoreError::Insufficient(Resource::Cups)),
            "Sorry, not enough disposable cups!"
        );
    }
}
