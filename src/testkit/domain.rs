//! Builders for domain values used across tests.
//!
//! Keeps test bodies focused on the movement being checked rather than on
//! wallet setup.

use crate::domain::{Amount, Currency, Person, Product, ProductKind};

/// Create a person whose wallet already holds `balance`.
///
/// # Panics
///
/// Panics if `balance` is negative.
pub fn person(name: &str, currency: Currency, balance: Amount) -> Person {
    let mut person = Person::new(name, currency);
    person
        .wallet_mut()
        .set_balance(balance)
        .expect("test balance must be non-negative");
    person
}

/// Create a product sold at `prices`.
pub fn product(name: &str, prices: &[(Currency, Amount)], kind: ProductKind) -> Product {
    Product::with_kind(name, prices.iter().copied(), kind)
}

/// Sum of every wallet balance, regardless of currency.
pub fn total<'a>(people: impl IntoIterator<Item = &'a Person>) -> Amount {
    people.into_iter().map(|p| p.wallet().balance()).sum()
}
