//! Update transaction use case

use std::sync::Arc;

use tracing::info;

use crate::domain::result::{Error, Result};
use crate::ports::{CategoryRepository, TransactionRepository};
use crate::usecases::dto::{TransactionResponse, UpdateTransactionRequest};

/// Applies a partial update to an existing transaction
///
/// Only description and category are mutable. Amount, type and date are
/// fixed at creation: the entity exposes no way to change them, and this
/// use case turns any attempt into an immutable-field error before a
/// single mutation is applied. A request with no mutable fields set still
/// round-trips through `save` unchanged.
pub struct UpdateTransactionUseCase {
    transactions: Arc<dyn TransactionRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl UpdateTransactionUseCase {
    pub fn new(
        transactions: Arc<dyn TransactionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            transactions,
            categories,
        }
    }

    pub fn execute(&self, request: UpdateTransactionRequest) -> Result<TransactionResponse> {
        let mut transaction = self
            .transactions
            .find_by_id(request.transaction_id)?
            .ok_or_else(|| {
                Error::not_found(format!(
                    "Transaction not found with id: {}",
                    request.transaction_id
                ))
            })?;

        reject_immutable_fields(&request)?;

        if let Some(description) = &request.description {
            transaction.update_description(description)?;
        }

        if let Some(category_id) = request.category_id {
            let category = self.categories.find_by_id(category_id)?.ok_or_else(|| {
                Error::not_found(format!("Category not found with id: {category_id}"))
            })?;

            if category.user_id() != transaction.user_id() {
                return Err(Error::ownership("Category does not belong to the user"));
            }

            transaction.assign_category(Some(category_id));
        }

        let saved = self.transactions.save(transaction)?;

        info!(transaction_id = %saved.id(), "transaction updated");
        Ok(TransactionResponse::from_entity(&saved))
    }
}

fn reject_immutable_fields(request: &UpdateTransactionRequest) -> Result<()> {
    if request.amount.is_some() {
        return Err(Error::ImmutableField(
            "Cannot update amount - field is immutable. Create a new transaction instead.".into(),
        ));
    }
    if request.kind.is_some() {
        return Err(Error::ImmutableField(
            "Cannot update type - field is immutable. Create a new transaction instead.".into(),
        ));
    }
    if request.date.is_some() {
        return Err(Error::ImmutableField(
            "Cannot update date - field is immutable. Create a new transaction instead.".into(),
        ));
    }
    Ok(())
}
