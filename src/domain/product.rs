//! Priced products and their tax categories.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::money::round_cents;
use super::{Amount, Currency, FundError};

/// Product category. Each category carries a fixed tax rate (TVA).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Food,
    Tech,
    Other,
}

impl ProductKind {
    /// Every supported category.
    pub const ALL: [ProductKind; 3] = [ProductKind::Food, ProductKind::Tech, ProductKind::Other];

    /// Category name as written in scenario files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Food => "food",
            ProductKind::Tech => "tech",
            ProductKind::Other => "other",
        }
    }

    /// Tax rate applied to this category.
    #[must_use]
    pub fn tva(&self) -> Decimal {
        match self {
            ProductKind::Food => dec!(0.10),
            ProductKind::Tech | ProductKind::Other => dec!(0.20),
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductKind {
    type Err = FundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FundError::InvalidType { kind: s.to_string() })
    }
}

/// A product with one price per currency it is sold in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    name: String,
    prices: BTreeMap<Currency, Amount>,
    kind: ProductKind,
}

impl Product {
    /// Create a product, validating its category name.
    ///
    /// Prices that are zero or negative are dropped without error.
    pub fn new(
        name: impl Into<String>,
        prices: impl IntoIterator<Item = (Currency, Amount)>,
        kind: &str,
    ) -> Result<Self, FundError> {
        Ok(Self::with_kind(name, prices, kind.parse()?))
    }

    /// Create a product from an already-typed category.
    #[must_use]
    pub fn with_kind(
        name: impl Into<String>,
        prices: impl IntoIterator<Item = (Currency, Amount)>,
        kind: ProductKind,
    ) -> Self {
        let prices = prices
            .into_iter()
            .filter(|(_, price)| *price > Decimal::ZERO)
            .collect();
        Self {
            name: name.into(),
            prices,
            kind,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    /// Prices by currency. Never contains a non-positive value.
    #[must_use]
    pub fn prices(&self) -> &BTreeMap<Currency, Amount> {
        &self.prices
    }

    /// Tax rate for this product's category.
    #[must_use]
    pub fn tva(&self) -> Decimal {
        self.kind.tva()
    }

    /// Price for a currency code.
    ///
    /// A code outside the supported set is `InvalidCurrency` even when the
    /// product could never have listed it; a supported code the product is
    /// not sold in is `CurrencyUnavailable`.
    pub fn price(&self, code: &str) -> Result<Amount, FundError> {
        let currency = Currency::from_code(code).ok_or_else(|| FundError::InvalidCurrency {
            code: code.to_string(),
        })?;
        self.price_in(currency)
    }

    /// Price for an already-validated currency.
    pub fn price_in(&self, currency: Currency) -> Result<Amount, FundError> {
        self.prices
            .get(&currency)
            .copied()
            .ok_or(FundError::CurrencyUnavailable { currency })
    }

    /// Price including tax, rounded to the cent. Informational only:
    /// purchases charge the listed price.
    pub fn price_with_tax(&self, code: &str) -> Result<Amount, FundError> {
        let price = self.price(code)?;
        Ok(round_cents(price * (Decimal::ONE + self.tva())))
    }
}
