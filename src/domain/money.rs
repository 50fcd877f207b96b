//! Monetary amount representation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Amount represented as a Decimal for precision.
pub type Amount = Decimal;

/// Number of decimal places that make up one cent.
pub const CENT_SCALE: u32 = 2;

/// Truncate an amount toward zero to whole cents.
#[must_use]
pub fn truncate_cents(amount: Amount) -> Amount {
    amount.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::ToZero)
}

/// Round an amount half-away-from-zero to whole cents.
#[must_use]
pub fn round_cents(amount: Amount) -> Amount {
    amount.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
