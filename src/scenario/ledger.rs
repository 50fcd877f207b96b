//! In-memory set of people and products that scenario steps run against.

use std::collections::HashMap;

use tracing::{info, warn};

use super::{RunReport, Step, StepOutcome, StepReport};
use crate::domain::{Person, Product};
use crate::error::{Error, Result, ScenarioError};

/// People and products addressed by name.
#[derive(Debug, Clone)]
pub struct Ledger {
    people: Vec<Person>,
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Ledger {
    /// Build a ledger. Later duplicates of a name shadow earlier ones.
    #[must_use]
    pub fn new(people: Vec<Person>, products: Vec<Product>) -> Self {
        let index = people
            .iter()
            .enumerate()
            .map(|(i, person)| (person.name().to_string(), i))
            .collect();
        Self {
            people,
            products,
            index,
        }
    }

    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    #[must_use]
    pub fn person(&self, name: &str) -> Option<&Person> {
        self.index.get(name).map(|&i| &self.people[i])
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Run `steps` in order.
    ///
    /// A step that breaks a fund rule changes nothing. With `halt_on_error`
    /// the run stops there with [`ScenarioError::Step`]; otherwise the
    /// failure is recorded and the next step runs.
    pub fn run(&mut self, steps: &[Step], halt_on_error: bool) -> Result<RunReport> {
        self.run_with(steps, halt_on_error, |_| {})
    }

    /// Like [`Ledger::run`], calling `on_step` after each step, including
    /// the one that halts the run.
    pub fn run_with(
        &mut self,
        steps: &[Step],
        halt_on_error: bool,
        mut on_step: impl FnMut(&StepReport),
    ) -> Result<RunReport> {
        let mut report = RunReport::default();

        for (offset, step) in steps.iter().enumerate() {
            let index = offset + 1;
            let outcome = match self.apply(step) {
                Ok(detail) => {
                    info!(step = index, action = step.action(), %detail, "step applied");
                    StepOutcome::Applied { detail }
                }
                Err(Error::Fund(error)) => {
                    warn!(step = index, action = step.action(), %error, "step failed");
                    StepOutcome::Failed { error }
                }
                Err(other) => return Err(other),
            };

            let step_report = StepReport {
                index,
                step: step.clone(),
                outcome,
            };
            on_step(&step_report);

            if let StepOutcome::Failed { error } = &step_report.outcome {
                if halt_on_error {
                    return Err(ScenarioError::Step {
                        index,
                        source: error.clone(),
                    }
                    .into());
                }
            }
            report.steps.push(step_report);
        }

        Ok(report)
    }

    /// Apply one step, returning a short description of what changed.
    pub fn apply(&mut self, step: &Step) -> Result<String> {
        match step {
            Step::Transfer { from, to, amount } => {
                let (payer, payee) = self.pair_mut(from, to)?;
                payer.transfer_fund(*amount, payee)?;
                Ok(format!("{} {} moved", amount, payer.wallet().currency()))
            }
            Step::Divide { from, among } => {
                let payer_index = self.position(from)?;
                let mut wanted = Vec::with_capacity(among.len());
                for name in among {
                    let i = self.position(name)?;
                    if i == payer_index {
                        return Err(ScenarioError::SameParty {
                            name: name.clone(),
                        }
                        .into());
                    }
                    if wanted.contains(&i) {
                        return Err(ScenarioError::RepeatedRecipient {
                            name: name.clone(),
                        }
                        .into());
                    }
                    wanted.push(i);
                }

                let mut payer = None;
                let mut recipients = Vec::with_capacity(wanted.len());
                for (i, person) in self.people.iter_mut().enumerate() {
                    if i == payer_index {
                        payer = Some(person);
                    } else if wanted.contains(&i) {
                        recipients.push(person);
                    }
                }
                let payer = payer.ok_or_else(|| ScenarioError::UnknownPerson {
                    name: from.clone(),
                })?;

                let plan = payer.divide_wallet(recipients)?;
                Ok(format!(
                    "{} each to {} recipient(s), {} kept",
                    plan.share(),
                    plan.recipients(),
                    plan.remainder()
                ))
            }
            Step::Buy { buyer, product } => {
                let i = self.position(buyer)?;
                let product = self
                    .products
                    .iter()
                    .find(|p| p.name() == product)
                    .ok_or_else(|| ScenarioError::UnknownProduct {
                        name: product.clone(),
                    })?;
                let buyer = &mut self.people[i];
                let charged = buyer.buy_product(product)?;
                Ok(format!("charged {} {}", charged, buyer.wallet().currency()))
            }
            Step::Deposit { person, amount } => {
                let wallet = self.person_mut(person)?.wallet_mut();
                wallet.add_fund(*amount)?;
                Ok(format!("balance {}", wallet.balance()))
            }
            Step::Withdraw { person, amount } => {
                let wallet = self.person_mut(person)?.wallet_mut();
                wallet.remove_fund(*amount)?;
                Ok(format!("balance {}", wallet.balance()))
            }
            Step::SetBalance { person, amount } => {
                let wallet = self.person_mut(person)?.wallet_mut();
                wallet.set_balance(*amount)?;
                Ok(format!("balance {}", wallet.balance()))
            }
            Step::SetCurrency { person, currency } => {
                let wallet = self.person_mut(person)?.wallet_mut();
                wallet.set_currency(currency)?;
                Ok(format!("currency {}", wallet.currency()))
            }
        }
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.index.get(name).copied().ok_or_else(|| {
            ScenarioError::UnknownPerson {
                name: name.to_string(),
            }
            .into()
        })
    }

    fn person_mut(&mut self, name: &str) -> Result<&mut Person> {
        let i = self.position(name)?;
        Ok(&mut self.people[i])
    }

    /// Borrow two different people mutably at once.
    fn pair_mut(&mut self, first: &str, second: &str) -> Result<(&mut Person, &mut Person)> {
        let (a, b) = (self.position(first)?, self.position(second)?);
        if a == b {
            return Err(ScenarioError::SameParty {
                name: first.to_string(),
            }
            .into());
        }
        if a < b {
            let (left, right) = self.people.split_at_mut(b);
            Ok((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.people.split_at_mut(a);
            Ok((&mut right[0], &mut left[b]))
        }
    }
}
