use std::path::Path;

use crate::cli::output;
use crate::error::Result;
use crate::scenario::Scenario;

/// Validate a scenario file without running any step.
pub fn execute<P: AsRef<Path>>(scenario_path: P) -> Result<()> {
    let path = scenario_path.as_ref();
    output::header();

    let scenario = Scenario::load(path)?;

    output::success(&format!("Scenario is valid: {}", path.display()));
    output::field("People", scenario.people().len());
    output::field("Products", scenario.products().len());
    output::field("Steps", scenario.steps().len());

    for product in scenario.products() {
        if product.prices().is_empty() {
            output::warning(&format!(
                "{} has no positive price and cannot be bought",
                product.name()
            ));
        }
    }

    Ok(())
}
