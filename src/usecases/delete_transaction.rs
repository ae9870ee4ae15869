//! Delete transaction use case

use std::sync::Arc;

use tracing::info;

use crate::domain::result::{Error, Result};
use crate::ports::TransactionRepository;
use crate::usecases::dto::DeleteTransactionRequest;

/// Deletes a transaction after checking it exists
///
/// No ownership check happens here; any caller holding a transaction id can
/// delete it. The transport layer is expected to scope ids to the caller.
pub struct DeleteTransactionUseCase {
    transactions: Arc<dyn TransactionRepository>,
}

impl DeleteTransactionUseCase {
    pub fn new(transactions: Arc<dyn TransactionRepository>) -> Self {
        Self { transactions }
    }

    pub fn execute(&self, request: DeleteTransactionRequest) -> Result<()> {
        let id = request.transaction_id;

        if self.transactions.find_by_id(id)?.is_none() {
            return Err(Error::not_found(format!(
                "Transaction not found with id: {id}"
            )));
        }

        self.transactions.delete_by_id(id)?;

        info!(transaction_id = %id, "transaction deleted");
        Ok(())
    }
}
