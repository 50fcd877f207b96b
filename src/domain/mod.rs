//! Wallets, people and products: the fund-movement rules.

mod currency;
mod distribution;
mod error;
mod money;
mod person;
mod product;
mod wallet;

pub use currency::Currency;
pub use distribution::Distribution;
pub use error::FundError;
pub use money::{round_cents, truncate_cents, Amount, CENT_SCALE};
pub use person::Person;
pub use product::{Product, ProductKind};
pub use wallet::Wallet;
