//! Budget domain model

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::date_range::DateRange;
use super::money::Money;
use super::result::{Error, Result};

/// A spending limit over a date period, optionally scoped to one category
///
/// The budget itself does not track spending; callers supply a "spent"
/// amount (aggregated elsewhere) and the budget derives remaining amount,
/// usage percentage and exceeded status from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    id: Uuid,
    user_id: Uuid,
    name: String,
    amount: Money,
    period: DateRange,
    category_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget with a freshly generated id
    ///
    /// The limit amount must be strictly positive.
    pub fn create(
        user_id: Uuid,
        name: &str,
        amount: Money,
        period: DateRange,
        category_id: Option<Uuid>,
    ) -> Result<Self> {
        validate_name(name)?;
        validate_amount(&amount)?;

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.trim().to_string(),
            amount,
            period,
            category_id,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> &Money {
        &self.amount
    }

    pub fn period(&self) -> &DateRange {
        &self.period
    }

    pub fn category_id(&self) -> Option<Uuid> {
        self.category_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Rename the budget, re-validating the name
    pub fn update_name(&mut self, new_name: &str) -> Result<()> {
        validate_name(new_name)?;
        self.name = new_name.trim().to_string();
        Ok(())
    }

    /// Replace the limit amount; must stay strictly positive
    pub fn update_amount(&mut self, new_amount: Money) -> Result<()> {
        validate_amount(&new_amount)?;
        self.amount = new_amount;
        Ok(())
    }

    /// Scope to (or unscope from) a category
    pub fn set_category(&mut self, category_id: Option<Uuid>) {
        self.category_id = category_id;
    }

    /// Whether today falls inside the budget period
    pub fn is_active(&self) -> bool {
        self.period.contains(Utc::now().date_naive())
    }

    /// Limit minus spent; negative when over budget
    pub fn calculate_remaining(&self, spent: &Money) -> Result<Decimal> {
        self.validate_spent(spent)?;
        Ok(self.amount.amount() - spent.amount())
    }

    /// Percentage of the limit consumed, rounded to 2 decimal places half-up
    ///
    /// Returns exactly zero for a zero-amount budget rather than dividing.
    pub fn calculate_percentage_used(&self, spent: &Money) -> Result<Decimal> {
        self.validate_spent(spent)?;

        if self.amount.amount() == Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }

        Ok(
            (spent.amount() * Decimal::from(100) / self.amount.amount())
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Whether spending strictly exceeds the limit; spending the exact limit
    /// is not exceeded
    pub fn is_exceeded(&self, spent: &Money) -> Result<bool> {
        self.validate_spent(spent)?;
        Ok(spent.amount() > self.amount.amount())
    }

    fn validate_spent(&self, spent: &Money) -> Result<()> {
        if spent.currency() != self.amount.currency() {
            return Err(Error::currency_mismatch(
                "Spent currency must match budget currency",
            ));
        }
        Ok(())
    }
}

impl PartialEq for Budget {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Budget {}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::validation("Budget name cannot be empty"));
    }
    Ok(())
}

fn validate_amount(amount: &Money) -> Result<()> {
    if amount.amount() <= Decimal::ZERO {
        return Err(Error::validation("Budget amount must be greater than zero"));
    }
    Ok(())
}
