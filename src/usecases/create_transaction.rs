//! Create transaction use case

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;

use crate::domain::result::{Error, Result};
use crate::domain::{Currency, Money, Transaction};
use crate::ports::{CategoryRepository, TransactionRepository, UserRepository};
use crate::usecases::dto::{CreateTransactionRequest, TransactionResponse};

/// All transactions are recorded in this currency until the request carries
/// one of its own.
const DEFAULT_CURRENCY: &str = "BRL";

/// Records a new income or expense transaction for a user
///
/// Shape validation (amount, description) runs strictly before any
/// repository lookup, so malformed requests fail without touching storage.
pub struct CreateTransactionUseCase {
    transactions: Arc<dyn TransactionRepository>,
    users: Arc<dyn UserRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl CreateTransactionUseCase {
    pub fn new(
        transactions: Arc<dyn TransactionRepository>,
        users: Arc<dyn UserRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            transactions,
            users,
            categories,
        }
    }

    pub fn execute(&self, request: CreateTransactionRequest) -> Result<TransactionResponse> {
        validate_request(&request)?;

        if self.users.find_by_id(request.user_id)?.is_none() {
            return Err(Error::not_found("User not found"));
        }

        if let Some(category_id) = request.category_id {
            let category = self
                .categories
                .find_by_id(category_id)?
                .ok_or_else(|| Error::not_found("Category not found"))?;

            if category.user_id() != request.user_id {
                return Err(Error::ownership("Category does not belong to user"));
            }
        }

        let currency = Currency::new(DEFAULT_CURRENCY)?;
        let amount = Money::new(request.amount, currency)?;

        let mut transaction = Transaction::create(
            request.user_id,
            amount,
            request.kind,
            &request.description,
            request.date.and_time(chrono::NaiveTime::MIN),
        )?;

        if request.category_id.is_some() {
            transaction.assign_category(request.category_id);
        }

        let saved = self.transactions.save(transaction)?;

        info!(transaction_id = %saved.id(), user_id = %saved.user_id(), "transaction created");
        Ok(TransactionResponse::from_entity(&saved))
    }
}

fn validate_request(request: &CreateTransactionRequest) -> Result<()> {
    if request.amount <= Decimal::ZERO {
        return Err(Error::validation("Amount must be greater than zero"));
    }
    if request.description.trim().is_empty() {
        return Err(Error::validation("Description is required"));
    }
    Ok(())
}
