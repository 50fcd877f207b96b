//! Scenario files: people, products and the steps to run against them.
//!
//! ```toml
//! [[people]]
//! name = "John"
//! currency = "EUR"
//! balance = "100"
//!
//! [[products]]
//! name = "Bread"
//! kind = "food"
//! prices = { EUR = "2.50" }
//!
//! [[steps]]
//! action = "buy"
//! buyer = "John"
//! product = "Bread"
//! ```

mod ledger;
mod step;

pub use ledger::Ledger;
pub use step::{RunReport, Step, StepOutcome, StepReport};

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::domain::{Amount, Currency, Person, Product};
use crate::error::{Result, ScenarioError};

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    #[serde(default)]
    people: Vec<PersonEntry>,
    #[serde(default)]
    products: Vec<ProductEntry>,
    #[serde(default)]
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
struct PersonEntry {
    name: String,
    currency: String,
    #[serde(default)]
    balance: Amount,
}

#[derive(Debug, Deserialize)]
struct ProductEntry {
    name: String,
    kind: String,
    #[serde(default)]
    prices: BTreeMap<String, Amount>,
}

/// A validated scenario: every name a step refers to exists.
#[derive(Debug, Clone)]
pub struct Scenario {
    people: Vec<Person>,
    products: Vec<Product>,
    steps: Vec<Step>,
}

impl Scenario {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ScenarioError::ReadFile)?;
        Self::parse(&content)
    }

    /// Parse a scenario and check every reference in its steps.
    pub fn parse(content: &str) -> Result<Self> {
        let file: ScenarioFile = toml::from_str(content).map_err(ScenarioError::Parse)?;

        let mut people = Vec::with_capacity(file.people.len());
        for entry in file.people {
            let mut person = Person::try_new(entry.name, &entry.currency)?;
            person.wallet_mut().set_balance(entry.balance)?;
            people.push(person);
        }

        let mut products = Vec::with_capacity(file.products.len());
        for entry in file.products {
            let prices = entry
                .prices
                .into_iter()
                .map(|(code, price)| Ok((code.parse::<Currency>()?, price)))
                .collect::<Result<Vec<_>>>()?;
            products.push(Product::new(entry.name, prices, &entry.kind)?);
        }

        let scenario = Self {
            people,
            products,
            steps: file.steps,
        };
        scenario.validate()?;
        Ok(scenario)
    }

    fn validate(&self) -> Result<()> {
        let people = unique_names(self.people.iter().map(Person::name))?;
        let products = unique_names(self.products.iter().map(Product::name))?;

        for step in &self.steps {
            let mut seen = HashSet::new();
            for name in step.people() {
                if !people.contains(name) {
                    return Err(ScenarioError::UnknownPerson { name: name.into() }.into());
                }
                if !seen.insert(name) {
                    return Err(repeated(step, name).into());
                }
            }
            if let Step::Buy { product, .. } = step {
                if !products.contains(product.as_str()) {
                    return Err(ScenarioError::UnknownProduct {
                        name: product.clone(),
                    }
                    .into());
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Find a product by name.
    #[must_use]
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name() == name)
    }

    /// Split into a ledger over the initial state and the steps to run on it.
    #[must_use]
    pub fn into_parts(self) -> (Ledger, Vec<Step>) {
        (Ledger::new(self.people, self.products), self.steps)
    }
}

fn unique_names<'a>(names: impl Iterator<Item = &'a str>) -> Result<HashSet<&'a str>> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ScenarioError::DuplicateName { name: name.into() }.into());
        }
    }
    Ok(seen)
}

/// A name appearing twice in one step: either the payer is also a payee,
/// or a payee is listed twice.
fn repeated(step: &Step, name: &str) -> ScenarioError {
    let payer = match step {
        Step::Transfer { from, .. } | Step::Divide { from, .. } => Some(from.as_str()),
        _ => None,
    };
    if payer == Some(name) {
        ScenarioError::SameParty { name: name.into() }
    } else {
        ScenarioError::RepeatedRecipient { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FundError;
    use crate::error::Error;
    use rust_decimal_macros::dec;

    const PEOPLE: &str = r#"
[[people]]
name = "John"
currency = "EUR"
balance = "100"

[[people]]
name = "Jane"
currency = "EUR"
"#;

    #[test]
    fn parses_people_with_balances() {
        let scenario = Scenario::parse(PEOPLE).unwrap();
        assert_eq!(scenario.people().len(), 2);
        assert_eq!(scenario.people()[0].wallet().balance(), dec!(100));
        assert_eq!(scenario.people()[1].wallet().balance(), dec!(0));
    }

    #[test]
    fn product_prices_are_filtered() {
        let scenario = Scenario::parse(
            r#"
[[products]]
name = "Laptop"
kind = "tech"
prices = { EUR = 50, USD = -10 }
"#,
        )
        .unwrap();
        let laptop = scenario.product("Laptop").unwrap();
        assert_eq!(laptop.prices().len(), 1);
        assert_eq!(laptop.price("EUR"), Ok(dec!(50)));
    }

    #[test]
    fn unsupported_person_currency_is_rejected() {
        let result = Scenario::parse("[[people]]\nname = \"Ivan\"\ncurrency = \"RUB\"\n");
        assert!(matches!(
            result,
            Err(Error::Fund(FundError::UnsupportedCurrency { .. }))
        ));
    }

    #[test]
    fn invalid_product_kind_is_rejected() {
        let result = Scenario::parse(
            "[[products]]\nname = \"Thing\"\nkind = \"invalid\"\nprices = { EUR = 1 }\n",
        );
        assert!(matches!(result, Err(Error::Fund(FundError::InvalidType { .. }))));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let content = format!("{PEOPLE}\n[[people]]\nname = \"John\"\ncurrency = \"USD\"\n");
        assert!(matches!(
            Scenario::parse(&content),
            Err(Error::Scenario(ScenarioError::DuplicateName { .. }))
        ));
    }

    #[test]
    fn unknown_people_are_rejected() {
        let content = format!(
            "{PEOPLE}\n[[steps]]\naction = \"transfer\"\nfrom = \"John\"\nto = \"Bob\"\namount = 1\n"
        );
        match Scenario::parse(&content) {
            Err(Error::Scenario(ScenarioError::UnknownPerson { name })) => assert_eq!(name, "Bob"),
            other => panic!("expected unknown person, got {other:?}"),
        }
    }

    #[test]
    fn self_transfer_is_rejected() {
        let content = format!(
            "{PEOPLE}\n[[steps]]\naction = \"transfer\"\nfrom = \"John\"\nto = \"John\"\namount = 1\n"
        );
        assert!(matches!(
            Scenario::parse(&content),
            Err(Error::Scenario(ScenarioError::SameParty { .. }))
        ));
    }

    #[test]
    fn repeated_recipient_is_rejected() {
        let content = format!(
            "{PEOPLE}\n[[steps]]\naction = \"divide\"\nfrom = \"John\"\namong = [\"Jane\", \"Jane\"]\n"
        );
        assert!(matches!(
            Scenario::parse(&content),
            Err(Error::Scenario(ScenarioError::RepeatedRecipient { .. }))
        ));
    }

    #[test]
    fn unknown_product_is_rejected() {
        let content =
            format!("{PEOPLE}\n[[steps]]\naction = \"buy\"\nbuyer = \"John\"\nproduct = \"Moon\"\n");
        assert!(matches!(
            Scenario::parse(&content),
            Err(Error::Scenario(ScenarioError::UnknownProduct { .. }))
        ));
    }
}
