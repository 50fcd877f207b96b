//! Single-currency wallet with a non-negative balance.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{Amount, Currency, FundError};

/// A currency-typed balance holder.
///
/// The balance can never go below zero: every mutator validates its input
/// and leaves the wallet untouched on error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wallet {
    currency: Currency,
    balance: Amount,
}

impl Wallet {
    /// Create an empty wallet in the given currency.
    #[must_use]
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            balance: Decimal::ZERO,
        }
    }

    /// Create an empty wallet from a currency code.
    pub fn try_new(code: &str) -> Result<Self, FundError> {
        Ok(Self::new(code.parse()?))
    }

    /// Get the current balance.
    #[must_use]
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Get the wallet currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Replace the balance.
    pub fn set_balance(&mut self, amount: Amount) -> Result<(), FundError> {
        ensure_non_negative(amount)?;
        self.balance = amount;
        Ok(())
    }

    /// Replace the currency. The balance is kept as-is, not converted.
    pub fn set_currency(&mut self, code: &str) -> Result<(), FundError> {
        self.currency = code.parse()?;
        Ok(())
    }

    /// Credit the wallet. Adding zero is allowed.
    pub fn add_fund(&mut self, amount: Amount) -> Result<(), FundError> {
        self.balance = self.credited(amount)?;
        Ok(())
    }

    /// Debit the wallet.
    pub fn remove_fund(&mut self, amount: Amount) -> Result<(), FundError> {
        ensure_non_negative(amount)?;
        self.ensure_covers(amount)?;
        self.balance -= amount;
        Ok(())
    }

    /// Check that the balance covers `amount` without changing anything.
    pub(crate) fn ensure_covers(&self, amount: Amount) -> Result<(), FundError> {
        if amount > self.balance {
            return Err(FundError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        Ok(())
    }

    /// Check that `amount` can be credited without changing anything.
    pub(crate) fn ensure_accepts(&self, amount: Amount) -> Result<(), FundError> {
        self.credited(amount).map(|_| ())
    }

    fn credited(&self, amount: Amount) -> Result<Amount, FundError> {
        ensure_non_negative(amount)?;
        self.balance
            .checked_add(amount)
            .ok_or(FundError::BalanceOverflow {
                balance: self.balance,
                amount,
            })
    }
}

fn ensure_non_negative(amount: Amount) -> Result<(), FundError> {
    if amount < Decimal::ZERO {
        return Err(FundError::InvalidAmount { amount });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn funded(currency: Currency, balance: Amount) -> Wallet {
        let mut wallet = Wallet::new(currency);
        wallet.set_balance(balance).unwrap();
        wallet
    }

    #[test]
    fn new_wallet_is_empty() {
        let wallet = Wallet::new(Currency::Usd);
        assert_eq!(wallet.balance(), dec!(0));
        assert_eq!(wallet.currency(), Currency::Usd);
    }

    #[test]
    fn try_new_rejects_unsupported_code() {
        assert_eq!(
            Wallet::try_new("RUB"),
            Err(FundError::UnsupportedCurrency {
                code: "RUB".into()
            })
        );
        assert_eq!(Wallet::try_new("GBP").unwrap().currency(), Currency::Gbp);
    }

    #[test]
    fn set_balance_rejects_negative() {
        let mut wallet = funded(Currency::Usd, dec!(10));
        let err = wallet.set_balance(dec!(-100)).unwrap_err();
        assert_eq!(err, FundError::InvalidAmount { amount: dec!(-100) });
        assert_eq!(wallet.balance(), dec!(10));
    }

    #[test]
    fn set_balance_accepts_zero() {
        let mut wallet = funded(Currency::Usd, dec!(10));
        wallet.set_balance(dec!(0)).unwrap();
        assert_eq!(wallet.balance(), dec!(0));
    }

    #[test]
    fn set_currency_keeps_balance() {
        let mut wallet = funded(Currency::Usd, dec!(42));
        wallet.set_currency("EUR").unwrap();
        assert_eq!(wallet.currency(), Currency::Eur);
        assert_eq!(wallet.balance(), dec!(42));
    }

    #[test]
    fn set_currency_rejects_unsupported() {
        let mut wallet = Wallet::new(Currency::Usd);
        let err = wallet.set_currency("RUB").unwrap_err();
        assert!(matches!(err, FundError::UnsupportedCurrency { .. }));
        assert_eq!(wallet.currency(), Currency::Usd);
    }

    #[test]
    fn add_fund_accumulates() {
        let mut wallet = funded(Currency::Eur, dec!(100));
        wallet.add_fund(dec!(50)).unwrap();
        assert_eq!(wallet.balance(), dec!(150));
    }

    #[test]
    fn add_zero_is_a_valid_no_op() {
        let mut wallet = funded(Currency::Eur, dec!(100));
        wallet.add_fund(dec!(0)).unwrap();
        assert_eq!(wallet.balance(), dec!(100));
    }

    #[test]
    fn add_negative_is_rejected() {
        let mut wallet = funded(Currency::Eur, dec!(100));
        assert_eq!(
            wallet.add_fund(dec!(-50)),
            Err(FundError::InvalidAmount { amount: dec!(-50) })
        );
        assert_eq!(wallet.balance(), dec!(100));
    }

    #[test]
    fn remove_fund_with_sufficient_balance() {
        let mut wallet = funded(Currency::Eur, dec!(100));
        wallet.remove_fund(dec!(50)).unwrap();
        assert_eq!(wallet.balance(), dec!(50));
    }

    #[test]
    fn remove_entire_balance() {
        let mut wallet = funded(Currency::Eur, dec!(12.34));
        wallet.remove_fund(dec!(12.34)).unwrap();
        assert_eq!(wallet.balance(), dec!(0));
    }

    #[test]
    fn remove_fund_with_insufficient_balance() {
        let mut wallet = funded(Currency::Eur, dec!(50));
        assert_eq!(
            wallet.remove_fund(dec!(100)),
            Err(FundError::InsufficientFunds {
                requested: dec!(100),
                available: dec!(50),
            })
        );
        assert_eq!(wallet.balance(), dec!(50));
    }

    #[test]
    fn remove_negative_is_rejected_before_balance_check() {
        let mut wallet = funded(Currency::Eur, dec!(100));
        assert_eq!(
            wallet.remove_fund(dec!(-50)),
            Err(FundError::InvalidAmount { amount: dec!(-50) })
        );
        assert_eq!(wallet.balance(), dec!(100));
    }

    #[test]
    fn add_fund_past_max_is_rejected() {
        let mut wallet = funded(Currency::Eur, Decimal::MAX);
        assert_eq!(
            wallet.add_fund(dec!(1)),
            Err(FundError::BalanceOverflow {
                balance: Decimal::MAX,
                amount: dec!(1),
            })
        );
        assert_eq!(wallet.balance(), Decimal::MAX);
    }

    #[test]
    fn add_fund_up_to_max_is_allowed() {
        let mut wallet = funded(Currency::Eur, Decimal::MAX - dec!(1));
        wallet.add_fund(dec!(1)).unwrap();
        assert_eq!(wallet.balance(), Decimal::MAX);
        assert!(wallet.ensure_accepts(dec!(0)).is_ok());
        assert!(wallet.ensure_accepts(dec!(0.01)).is_err());
    }

    #[test]
    fn negative_zero_counts_as_zero() {
        let mut wallet = funded(Currency::Eur, dec!(5));
        wallet.add_fund(-dec!(0)).unwrap();
        assert_eq!(wallet.balance(), dec!(5));
    }
}
