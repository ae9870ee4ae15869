//! Money value object
//!
//! Immutable amount + ISO 4217 currency pair. Amounts are `rust_decimal`
//! values, so `1.0` and `1.00` compare equal and arithmetic is exact.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// ISO 4217 currency code, normalized to uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency(String);

impl Currency {
    /// Parse a currency code. Must be exactly three ASCII letters.
    pub fn new(code: &str) -> Result<Self> {
        let normalized = code.trim().to_uppercase();
        if normalized.len() != 3 || !normalized.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::validation(format!(
                "Invalid currency code: {code}"
            )));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A non-negative monetary amount in a single currency
///
/// Operations between two `Money` values require identical currencies and
/// fail with a currency-mismatch error otherwise. Equality is numeric:
/// representation differences in the decimal amount do not matter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Create a new Money value. The amount must not be negative.
    pub fn new(amount: Decimal, currency: Currency) -> Result<Self> {
        if amount < Decimal::ZERO {
            return Err(Error::validation("Amount cannot be negative"));
        }
        Ok(Self { amount, currency })
    }

    /// Zero amount in the given currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Add another Money value of the same currency
    pub fn add(&self, other: &Money) -> Result<Money> {
        self.require_same_currency(other, "Cannot add money with different currencies")?;
        Money::new(self.amount + other.amount, self.currency.clone())
    }

    /// Subtract another Money value of the same currency
    ///
    /// Fails if the result would be negative; Money never holds a negative
    /// amount.
    pub fn subtract(&self, other: &Money) -> Result<Money> {
        self.require_same_currency(other, "Cannot subtract money with different currencies")?;
        Money::new(self.amount - other.amount, self.currency.clone())
    }

    /// Strict numeric comparison against another Money of the same currency
    pub fn is_greater_than(&self, other: &Money) -> Result<bool> {
        self.require_same_currency(other, "Cannot compare money with different currencies")?;
        Ok(self.amount > other.amount)
    }

    fn require_same_currency(&self, other: &Money, msg: &str) -> Result<()> {
        if self.currency != other.currency {
            return Err(Error::currency_mismatch(msg));
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}
