//! Handler for the `price` command.

use crate::cli::{output, PriceArgs};
use crate::error::{Result, ScenarioError};
use crate::scenario::Scenario;

/// Print a product's listed price, tax rate and informational gross price.
pub fn execute(args: &PriceArgs) -> Result<()> {
    let scenario = Scenario::load(&args.scenario)?;
    let product = scenario
        .product(&args.product)
        .ok_or_else(|| ScenarioError::UnknownProduct {
            name: args.product.clone(),
        })?;

    let price = product.price(&args.currency)?;
    let gross = product.price_with_tax(&args.currency)?;

    output::header();
    output::section(product.name());
    output::field("Kind", product.kind());
    output::field("Price", format!("{} {}", price, args.currency));
    output::field("TVA", product.tva());
    output::field("With tax", format!("{} {}", gross, args.currency));

    Ok(())
}
