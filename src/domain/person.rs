//! A wallet holder who can pay, split and spend.

use rust_decimal::Decimal;
use tracing::debug;

use super::{Amount, Currency, Distribution, FundError, Product, Wallet};

/// A named owner of exactly one wallet.
///
/// Operations that touch more than one wallet validate everything first
/// and only then apply the changes, so an error always leaves every wallet
/// as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    wallet: Wallet,
}

impl Person {
    /// Create a person with an empty wallet in `currency`.
    #[must_use]
    pub fn new(name: impl Into<String>, currency: Currency) -> Self {
        Self {
            name: name.into(),
            wallet: Wallet::new(currency),
        }
    }

    /// Create a person from a currency code.
    pub fn try_new(name: impl Into<String>, code: &str) -> Result<Self, FundError> {
        Ok(Self {
            name: name.into(),
            wallet: Wallet::try_new(code)?,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    pub fn wallet_mut(&mut self) -> &mut Wallet {
        &mut self.wallet
    }

    /// Returns true if the wallet holds anything.
    #[must_use]
    pub fn has_fund(&self) -> bool {
        self.wallet.balance() > Decimal::ZERO
    }

    /// Move `amount` from this person's wallet to `recipient`'s.
    ///
    /// # Errors
    ///
    /// Checked in order: `CurrencyMismatch`, `InvalidAmount` when
    /// `amount <= 0`, `InsufficientFunds`, then `BalanceOverflow` if the
    /// recipient cannot hold the credit.
    pub fn transfer_fund(&mut self, amount: Amount, recipient: &mut Person) -> Result<(), FundError> {
        let (from, to) = (self.wallet.currency(), recipient.wallet.currency());
        if from != to {
            return Err(FundError::CurrencyMismatch { from, to });
        }
        if amount <= Decimal::ZERO {
            return Err(FundError::InvalidAmount { amount });
        }
        self.wallet.ensure_covers(amount)?;
        recipient.wallet.ensure_accepts(amount)?;

        self.wallet.remove_fund(amount)?;
        recipient.wallet.add_fund(amount)?;

        debug!(
            from = %self.name,
            to = %recipient.name,
            %amount,
            currency = %from,
            "funds transferred"
        );
        Ok(())
    }

    /// Split this person's balance with every recipient sharing its currency.
    ///
    /// Recipients holding another currency are skipped. The holder counts
    /// as one party and keeps whatever truncation to the cent leaves over.
    /// Returns the plan that was applied.
    ///
    /// # Errors
    ///
    /// `InsufficientFunds` when the balance is zero and at least one
    /// recipient is eligible, `BalanceOverflow` when a recipient cannot hold
    /// the share.
    pub fn divide_wallet<'a, I>(&mut self, recipients: I) -> Result<Distribution, FundError>
    where
        I: IntoIterator<Item = &'a mut Person>,
    {
        let currency = self.wallet.currency();
        let mut eligible: Vec<&mut Person> = recipients
            .into_iter()
            .filter(|recipient| recipient.wallet.currency() == currency)
            .collect();

        let plan = Distribution::plan(self.wallet.balance(), eligible.len())?;
        if plan.recipients() == 0 {
            return Ok(plan);
        }
        for recipient in &eligible {
            recipient.wallet.ensure_accepts(plan.share())?;
        }

        self.wallet.set_balance(plan.remainder())?;
        for recipient in &mut eligible {
            recipient.wallet.add_fund(plan.share())?;
        }

        debug!(
            from = %self.name,
            recipients = plan.recipients(),
            share = %plan.share(),
            remainder = %plan.remainder(),
            "wallet divided"
        );
        Ok(plan)
    }

    /// Pay the listed price of `product` in this wallet's currency.
    ///
    /// Tax is not added to the charge. Returns the amount debited.
    ///
    /// # Errors
    ///
    /// `ProductCurrencyMismatch` if the product is not sold in the wallet
    /// currency, `InsufficientFunds` if the price exceeds the balance.
    pub fn buy_product(&mut self, product: &Product) -> Result<Amount, FundError> {
        let currency = self.wallet.currency();
        let price = product.price_in(currency).map_err(|err| match err {
            FundError::InvalidCurrency { .. } | FundError::CurrencyUnavailable { .. } => {
                FundError::ProductCurrencyMismatch {
                    product: product.name().to_string(),
                    currency,
                }
            }
            other => other,
        })?;

        self.wallet.remove_fund(price)?;

        debug!(
            buyer = %self.name,
            product = product.name(),
            %price,
            %currency,
            "product bought"
        );
        Ok(price)
    }
}
