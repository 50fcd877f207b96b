//! fundflow - currency-typed wallets and the rules for moving money between them.
//!
//! # Modules
//!
//! - [`domain`] - Wallets, people, products and the fund-movement rules
//! - [`scenario`] - TOML scenario files and the ledger that runs them
//! - [`config`] - Configuration loading from TOML files
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line front end used by the `fundflow` binary
//!
//! # Features
//!
//! - `testkit` - Builders for tests (always on for unit tests)
//!
//! # Example
//!
//! ```
//! use fundflow::domain::{Currency, Person};
//! use rust_decimal_macros::dec;
//!
//! let mut john = Person::new("John", Currency::Eur);
//! let mut jane = Person::new("Jane", Currency::Eur);
//! let mut jack = Person::new("Jack", Currency::Eur);
//! john.wallet_mut().set_balance(dec!(100)).unwrap();
//!
//! john.divide_wallet([&mut jane, &mut jack]).unwrap();
//!
//! assert_eq!(jane.wallet().balance(), dec!(33.33));
//! assert_eq!(jack.wallet().balance(), dec!(33.33));
//! assert_eq!(john.wallet().balance(), dec!(33.34));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod scenario;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
