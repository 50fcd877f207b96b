//! Handler for the `run` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::cli::{output, RunArgs};
use crate::config::Config;
use crate::domain::Person;
use crate::error::Result;
use crate::scenario::{Scenario, StepOutcome, StepReport};

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

impl From<&Person> for BalanceRow {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name().to_string(),
            currency: person.wallet().currency().to_string(),
            balance: person.wallet().balance().to_string(),
        }
    }
}

/// Execute a scenario and print each step plus the resulting balances.
pub fn execute(args: &RunArgs, config: &Config) -> Result<()> {
    let scenario = Scenario::load(&args.scenario)?;
    let halt_on_error = config.ledger.halt_on_error && !args.keep_going;
    let (mut ledger, steps) = scenario.into_parts();

    output::header();
    output::section("Steps");

    let result = ledger.run_with(&steps, halt_on_error, print_step);

    output::section("Balances");
    if output::is_json() {
        for person in ledger.people() {
            output::emit_json_line(
                "balance",
                json!({
                    "name": person.name(),
                    "currency": person.wallet().currency(),
                    "balance": person.wallet().balance(),
                }),
            );
        }
    } else {
        let rows: Vec<BalanceRow> = ledger.people().iter().map(BalanceRow::from).collect();
        output::table(&Table::new(rows).to_string());
    }

    let report = result?;
    let failed = report.failures().count();
    if failed > 0 {
        output::warning(&format!(
            "{} of {} steps failed and were skipped",
            failed,
            report.steps.len()
        ));
    } else {
        output::success(&format!("{} steps applied", report.applied()));
    }

    Ok(())
}

fn print_step(report: &StepReport) {
    if output::is_json() {
        let (status, detail) = match &report.outcome {
            StepOutcome::Applied { detail } => ("applied", detail.clone()),
            StepOutcome::Failed { error } => ("failed", error.to_string()),
        };
        output::emit_json_line(
            "step",
            json!({
                "index": report.index,
                "action": report.step.action(),
                "step": report.step.to_string(),
                "status": status,
                "detail": detail,
            }),
        );
        return;
    }

    let line = format!("{:>3}. {}", report.index, report.step);
    match &report.outcome {
        StepOutcome::Applied { detail } => output::success(&format!("{line} ({detail})")),
        StepOutcome::Failed { error } => output::warning(&format!("{line}: {error}")),
    }
}
