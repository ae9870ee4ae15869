//! Transaction domain model

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::money::Money;
use super::result::{Error, Result};

/// Direction of a transaction's effect on the owner's balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

/// A single income or expense entry belonging to a user
///
/// `amount`, `kind`, `transaction_date` and `user_id` are fixed at creation:
/// no mutator exists for them. Description and category are the only fields
/// that can change afterwards, each through its own re-validating method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    id: Uuid,
    user_id: Uuid,
    amount: Money,
    kind: TransactionType,
    description: String,
    category_id: Option<Uuid>,
    transaction_date: NaiveDateTime,
    created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction with a freshly generated id
    ///
    /// The amount must be strictly positive and the description non-blank.
    pub fn create(
        user_id: Uuid,
        amount: Money,
        kind: TransactionType,
        description: &str,
        transaction_date: NaiveDateTime,
    ) -> Result<Self> {
        if amount.amount() <= Decimal::ZERO {
            return Err(Error::validation("Amount must be greater than zero"));
        }
        validate_description(description)?;

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            amount,
            kind,
            description: description.trim().to_string(),
            category_id: None,
            transaction_date,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn amount(&self) -> &Money {
        &self.amount
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category_id(&self) -> Option<Uuid> {
        self.category_id
    }

    pub fn transaction_date(&self) -> NaiveDateTime {
        self.transaction_date
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Absolute amount affecting the balance; direction comes from [`Self::kind`]
    pub fn balance_impact(&self) -> &Money {
        &self.amount
    }

    /// Whether this transaction increases the owner's balance
    pub fn is_balance_increase(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Replace the description, re-validating it
    pub fn update_description(&mut self, new_description: &str) -> Result<()> {
        validate_description(new_description)?;
        self.description = new_description.trim().to_string();
        Ok(())
    }

    /// Assign or clear the category
    pub fn assign_category(&mut self, category_id: Option<Uuid>) {
        self.category_id = category_id;
    }
}

impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Transaction {}

fn validate_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(Error::validation("Description cannot be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Currency;
    use chrono::NaiveDate;

    fn money(cents: i64) -> Money {
        Money::new(Decimal::new(cents, 2), Currency::new("USD").unwrap()).unwrap()
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_create_expense() {
        let tx = Transaction::create(
            Uuid::new_v4(),
            money(10000),
            TransactionType::Expense,
            "Lunch",
            noon(),
        )
        .unwrap();

        assert_eq!(tx.description(), "Lunch");
        assert_eq!(tx.kind(), TransactionType::Expense);
        assert!(!tx.is_balance_increase());
        assert_eq!(tx.balance_impact(), &money(10000));
        assert!(tx.category_id().is_none());
    }

    #[test]
    fn test_income_increases_balance() {
        let tx = Transaction::create(
            Uuid::new_v4(),
            money(50000),
            TransactionType::Income,
            "Salary",
            noon(),
        )
        .unwrap();
        assert!(tx.is_balance_increase());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let err = Transaction::create(
            Uuid::new_v4(),
            money(0),
            TransactionType::Expense,
            "Lunch",
            noon(),
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_blank_description_rejected() {
        assert!(Transaction::create(
            Uuid::new_v4(),
            money(100),
            TransactionType::Expense,
            "   ",
            noon(),
        )
        .is_err());
    }

    #[test]
    fn test_update_description() {
        let mut tx = Transaction::create(
            Uuid::new_v4(),
            money(100),
            TransactionType::Expense,
            "Lunch",
            noon(),
        )
        .unwrap();

        tx.update_description("  Dinner ").unwrap();
        assert_eq!(tx.description(), "Dinner");
        assert!(tx.update_description(" ").is_err());
        assert_eq!(tx.description(), "Dinner");
    }

    #[test]
    fn test_assign_and_clear_category() {
        let mut tx = Transaction::create(
            Uuid::new_v4(),
            money(100),
            TransactionType::Expense,
            "Lunch",
            noon(),
        )
        .unwrap();

        let category = Uuid::new_v4();
        tx.assign_category(Some(category));
        assert_eq!(tx.category_id(), Some(category));
        tx.assign_category(None);
        assert!(tx.category_id().is_none());
    }

    #[test]
    fn test_type_serialization_uses_wire_words() {
        assert_eq!(
            serde_json::to_string(&TransactionType::Income).unwrap(),
            "\"INCOME\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionType::Expense).unwrap(),
            "\"EXPENSE\""
        );
    }
}
