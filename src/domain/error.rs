//! Domain validation errors for wallets, people and products.
//!
//! Every fund-moving operation validates its inputs before touching a
//! balance, so any of these errors means no wallet was changed.
//!
//! # Examples
//!
//! ```
//! use fundflow::domain::{Currency, FundError, Wallet};
//! use rust_decimal_macros::dec;
//!
//! let mut wallet = Wallet::new(Currency::Eur);
//! wallet.set_balance(dec!(50)).unwrap();
//!
//! let result = wallet.remove_fund(dec!(100));
//! assert!(matches!(result, Err(FundError::InsufficientFunds { .. })));
//! assert_eq!(wallet.balance(), dec!(50));
//! ```

use thiserror::Error;

use super::{Amount, Currency};

/// Errors raised when a fund movement or lookup violates a domain rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FundError {
    /// Amount is negative, or non-positive where a strictly positive amount is required.
    #[error("invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount.
        amount: Amount,
    },

    /// A debit exceeds what the wallet holds.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        /// Amount the operation needed.
        requested: Amount,
        /// Balance at the time of the request.
        available: Amount,
    },

    /// A credit would push the balance past the largest representable amount.
    #[error("balance overflow: {balance} + {amount}")]
    BalanceOverflow {
        /// Balance before the credit.
        balance: Amount,
        /// Amount that could not be credited.
        amount: Amount,
    },

    /// Funds cannot move between wallets of different currencies.
    #[error("can't give money with different currencies: {from} to {to}")]
    CurrencyMismatch { from: Currency, to: Currency },

    /// A wallet currency outside the supported set.
    #[error("unsupported currency: {code}")]
    UnsupportedCurrency { code: String },

    /// A product category outside the supported set.
    #[error("invalid type: {kind}")]
    InvalidType { kind: String },

    /// A price lookup for a code outside the supported set.
    #[error("invalid currency: {code}")]
    InvalidCurrency { code: String },

    /// The product is not sold in this currency.
    #[error("currency not available for this product: {currency}")]
    CurrencyUnavailable { currency: Currency },

    /// A purchase attempted in a currency the product is not sold in.
    #[error("can't buy {product} with this wallet currency: {currency}")]
    ProductCurrencyMismatch { product: String, currency: Currency },
}
