//! Even split of a balance among recipients, computed before anything moves.

use rust_decimal::Decimal;
use serde::Serialize;

use super::money::truncate_cents;
use super::{Amount, FundError};

/// How a balance is split between its holder and `recipients` others.
///
/// The holder counts as one of the parties: each recipient gets
/// `balance / (recipients + 1)` truncated to the cent, and the holder keeps
/// the rest, so `share * recipients + remainder` always equals the original
/// balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Distribution {
    share: Amount,
    recipients: usize,
    remainder: Amount,
}

impl Distribution {
    /// Plan the split of `balance` among `recipients`.
    ///
    /// With no recipients the plan keeps everything with the sender. An
    /// empty balance cannot be split among one or more recipients.
    pub fn plan(balance: Amount, recipients: usize) -> Result<Self, FundError> {
        if recipients == 0 {
            return Ok(Self::unchanged(balance));
        }
        if balance <= Decimal::ZERO {
            return Err(FundError::InsufficientFunds {
                requested: balance,
                available: balance,
            });
        }

        let parties = Decimal::from(recipients) + Decimal::ONE;
        let share = truncate_cents(balance / parties);
        Ok(Self {
            share,
            recipients,
            remainder: balance - share * Decimal::from(recipients),
        })
    }

    /// A plan that distributes nothing.
    #[must_use]
    pub fn unchanged(balance: Amount) -> Self {
        Self {
            share: Decimal::ZERO,
            recipients: 0,
            remainder: balance,
        }
    }

    /// Amount credited to each recipient.
    #[must_use]
    pub fn share(&self) -> Amount {
        self.share
    }

    #[must_use]
    pub fn recipients(&self) -> usize {
        self.recipients
    }

    /// Amount the sender keeps.
    #[must_use]
    pub fn remainder(&self) -> Amount {
        self.remainder
    }

    /// Total credited across all recipients.
    #[must_use]
    pub fn distributed(&self) -> Amount {
        self.share * Decimal::from(self.recipients)
    }
}
