//! # Session Loop
//!
//! Reads actions, asks follow-up questions, calls into `brew-core` and prints
//! the outcome.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  "Write action (...)" ──► token ──► Action                              │
//! │                                       │                                 │
//! │     buy ───────► selector ──► purchase() ──► served / "Sorry, ..."      │
//! │     fill ──────► 4 amounts ─► Inventory::fill()                         │
//! │     take ──────► Inventory::take_money() ──► "I give you $N"            │
//! │     remaining ─► snapshot() ──► report                                  │
//! │     estimate ──► cups ──► can_make() ──► requirement + verdict          │
//! │     exit / EOF ─► stop                                                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input is consumed one whitespace-separated token at a time, so answers may
//! share a line or span several.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use brew_core::validation::{parse_amount, parse_selector};
use brew_core::{can_make, purchase, Inventory, ValidationError};
use tracing::{debug, info, warn};

use crate::config::ReportFormat;
use crate::error::CliResult;
use crate::report;

/// Main menu prompt.
pub const ACTION_PROMPT: &str = "Write action (buy, fill, take, remaining, estimate, exit):";

const BUY_PROMPT: &str =
    "What do you want to buy? 1 - espresso, 2 - latte, 3 - cappuccino, back - to main menu:";

const FILL_QUESTIONS: [(&str, &str); 4] = [
    ("water", "Write how many ml of water you want to add:"),
    ("milk", "Write how many ml of milk you want to add:"),
    ("beans", "Write how many grams of coffee beans you want to add:"),
    ("cups", "Write how many disposable cups you want to add:"),
];

const ESTIMATE_PROMPT: &str = "Write how many cups of coffee you will need:";

// =============================================================================
// Action
// =============================================================================

/// A main-menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Buy,
    Fill,
    Take,
    Remaining,
    Estimate,
    Exit,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buy" => Ok(Action::Buy),
            "fill" => Ok(Action::Fill),
            "take" => Ok(Action::Take),
            "remaining" => Ok(Action::Remaining),
            "estimate" => Ok(Action::Estimate),
            "exit" => Ok(Action::Exit),
            other => Err(other.to_string()),
        }
    }
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

// =============================================================================
// Tokens
// =============================================================================

/// Whitespace-separated tokens pulled lazily from a reader.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Tokens {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    fn next_token(&mut self) -> CliResult<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// One machine, one user, one conversation.
pub struct Session<R, W> {
    input: Tokens<R>,
    output: W,
    inventory: Inventory,
    report_format: ReportFormat,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Starts a session on a freshly seeded machine.
    pub fn new(input: R, output: W, report_format: ReportFormat) -> Self {
        Session {
            input: Tokens::new(input),
            output,
            inventory: Inventory::seeded(),
            report_format,
        }
    }

    /// The machine as it stands.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Runs until `exit` or end of input.
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            writeln!(self.output, "{ACTION_PROMPT}")?;
            let flow = self.step()?;
            writeln!(self.output)?;
            self.output.flush()?;

            if flow == Flow::Stop {
                return Ok(());
            }
        }
    }

    fn step(&mut self) -> CliResult<Flow> {
        let Some(token) = self.input.next_token()? else {
            debug!("End of input");
            return Ok(Flow::Stop);
        };

        let action = match token.parse::<Action>() {
            Ok(action) => action,
            Err(unknown) => {
                debug!(token = %unknown, "Ignoring unknown action");
                return Ok(Flow::Continue);
            }
        };
        debug!(?action, "Action received");

        match action {
            Action::Buy => self.buy(),
            Action::Fill => self.fill(),
            Action::Take => self.take(),
            Action::Remaining => self.remaining(),
            Action::Estimate => self.estimate(),
            Action::Exit => {
                info!("Exit requested");
                Ok(Flow::Stop)
            }
        }
    }

    fn buy(&mut self) -> CliResult<Flow> {
        writeln!(self.output)?;
        writeln!(self.output, "{BUY_PROMPT}")?;

        let Some(token) = self.input.next_token()? else {
            return Ok(Flow::Stop);
        };
        let Some(beverage) = parse_selector(&token) else {
            debug!(selector = %token, "Back to main menu");
            return Ok(Flow::Continue);
        };

        match purchase(&mut self.inventory, beverage) {
            Ok(brew) => {
                info!(%beverage, price = %brew.price, "Beverage served");
                writeln!(self.output, "I have enough resources, making you a coffee!")?;
            }
            Err(err) => {
                warn!(%beverage, error = %err, "Purchase refused");
                writeln!(self.output, "{}", report::refusal(&err))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn fill(&mut self) -> CliResult<Flow> {
        writeln!(self.output)?;

        let mut amounts = [0u32; 4];
        for (slot, (field, question)) in amounts.iter_mut().zip(FILL_QUESTIONS) {
            writeln!(self.output, "{question}")?;
            match self.read_amount(field)? {
                Some(Ok(amount)) => *slot = amount,
                Some(Err(err)) => {
                    warn!(error = %err, "Fill rejected");
                    writeln!(self.output, "Invalid answer: {err}")?;
                    return Ok(Flow::Continue);
                }
                None => return Ok(Flow::Stop),
            }
        }

        let [water, milk, beans, cups] = amounts;
        self.inventory.fill(water, milk, beans, cups);
        info!(water, milk, beans, cups, "Machine filled");
        Ok(Flow::Continue)
    }

    fn take(&mut self) -> CliResult<Flow> {
        let amount = self.inventory.take_money();
        info!(%amount, "Money taken");
        writeln!(self.output, "I give you {amount}")?;
        Ok(Flow::Continue)
    }

    fn remaining(&mut self) -> CliResult<Flow> {
        let text = report::levels(&self.inventory.snapshot(), self.report_format)?;
        writeln!(self.output)?;
        writeln!(self.output, "{text}")?;
        Ok(Flow::Continue)
    }

    fn estimate(&mut self) -> CliResult<Flow> {
        writeln!(self.output)?;
        writeln!(self.output, "{ESTIMATE_PROMPT}")?;

        let cups = match self.read_amount("cups")? {
            Some(Ok(cups)) => cups,
            Some(Err(err)) => {
                warn!(error = %err, "Estimate rejected");
                writeln!(self.output, "Invalid answer: {err}")?;
                return Ok(Flow::Continue);
            }
            None => return Ok(Flow::Stop),
        };

        let feasibility = can_make(self.inventory.ingredients(), cups);
        debug!(cups, ?feasibility, "Estimate computed");
        writeln!(self.output, "{}", report::requirement(cups))?;
        writeln!(self.output, "{}", report::verdict(&feasibility))?;
        Ok(Flow::Continue)
    }

    /// `None` at end of input; otherwise the parsed answer.
    fn read_amount(&mut self, field: &str) -> CliResult<Option<Result<u32, ValidationError>>> {
        Ok(self
            .input
            .next_token()?
            .map(|token| parse_amount(field, &token)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
