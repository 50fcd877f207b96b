//! Scenario steps and their outcomes.

use std::fmt;

use serde::Deserialize;

use crate::domain::{Amount, FundError};

/// One fund movement, referring to people and products by name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Transfer {
        from: String,
        to: String,
        amount: Amount,
    },
    Divide {
        from: String,
        among: Vec<String>,
    },
    Buy {
        buyer: String,
        product: String,
    },
    Deposit {
        person: String,
        amount: Amount,
    },
    Withdraw {
        person: String,
        amount: Amount,
    },
    SetBalance {
        person: String,
        amount: Amount,
    },
    SetCurrency {
        person: String,
        currency: String,
    },
}

impl Step {
    /// Action name as written in scenario files.
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            Step::Transfer { .. } => "transfer",
            Step::Divide { .. } => "divide",
            Step::Buy { .. } => "buy",
            Step::Deposit { .. } => "deposit",
            Step::Withdraw { .. } => "withdraw",
            Step::SetBalance { .. } => "set_balance",
            Step::SetCurrency { .. } => "set_currency",
        }
    }

    /// Every person this step touches, in the order they appear.
    pub(crate) fn people(&self) -> Vec<&str> {
        match self {
            Step::Transfer { from, to, .. } => vec![from.as_str(), to.as_str()],
            Step::Divide { from, among } => {
                std::iter::once(from.as_str()).chain(among.iter().map(String::as_str)).collect()
            }
            Step::Buy { buyer, .. } => vec![buyer.as_str()],
            Step::Deposit { person, .. }
            | Step::Withdraw { person, .. }
            | Step::SetBalance { person, .. }
            | Step::SetCurrency { person, .. } => vec![person.as_str()],
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Transfer { from, to, amount } => write!(f, "{from} pays {amount} to {to}"),
            Step::Divide { from, among } => write!(f, "{from} divides with {}", among.join(", ")),
            Step::Buy { buyer, product } => write!(f, "{buyer} buys {product}"),
            Step::Deposit { person, amount } => write!(f, "{person} deposits {amount}"),
            Step::Withdraw { person, amount } => write!(f, "{person} withdraws {amount}"),
            Step::SetBalance { person, amount } => write!(f, "{person} balance set to {amount}"),
            Step::SetCurrency { person, currency } => {
                write!(f, "{person} currency set to {currency}")
            }
        }
    }
}

/// What happened when a step ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Applied { detail: String },
    Failed { error: FundError },
}

impl StepOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, StepOutcome::Applied { .. })
    }
}

/// Outcome of one step, numbered from 1 in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub index: usize,
    pub step: Step,
    pub outcome: StepOutcome,
}

/// Every step outcome of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub steps: Vec<StepReport>,
}

impl RunReport {
    #[must_use]
    pub fn applied(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_applied()).count()
    }

    /// Steps that failed and were skipped.
    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|s| !s.outcome.is_applied())
    }
}
