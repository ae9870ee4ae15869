//! List transactions use case

use std::sync::Arc;

use tracing::debug;

use crate::domain::result::{Error, Result};
use crate::ports::{TransactionFilter, TransactionRepository, UserRepository};
use crate::usecases::dto::{
    ListTransactionsRequest, PagedTransactionsResponse, TransactionResponse,
};

/// Lists a user's transactions with optional filters and pagination
///
/// Filter semantics (inclusive date bounds, exact type/category matches)
/// belong to the repository adapter; this use case validates the request,
/// checks the user exists and computes the page envelope.
pub struct ListTransactionsUseCase {
    transactions: Arc<dyn TransactionRepository>,
    users: Arc<dyn UserRepository>,
}

impl ListTransactionsUseCase {
    pub fn new(
        transactions: Arc<dyn TransactionRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            transactions,
            users,
        }
    }

    pub fn execute(&self, request: ListTransactionsRequest) -> Result<PagedTransactionsResponse> {
        validate_pagination(request.size)?;
        validate_date_range(&request)?;

        if self.users.find_by_id(request.user_id)?.is_none() {
            return Err(Error::not_found(format!(
                "User not found with id: {}",
                request.user_id
            )));
        }

        let filter = TransactionFilter {
            user_id: request.user_id,
            start_date: request.start_date,
            end_date: request.end_date,
            kind: request.kind,
            category_id: request.category_id,
        };

        let transactions = self
            .transactions
            .find_with_filters(&filter, request.page, request.size)?;
        let total_elements = self.transactions.count_with_filters(&filter)?;

        let items: Vec<TransactionResponse> = transactions
            .iter()
            .map(TransactionResponse::from_entity)
            .collect();

        // Saturate rather than truncate when the count overflows the page type
        let total_pages = u32::try_from(total_elements.div_ceil(u64::from(request.size)))
            .unwrap_or(u32::MAX);

        debug!(
            user_id = %request.user_id,
            page = request.page,
            returned = items.len(),
            total_elements,
            "transactions listed"
        );

        Ok(PagedTransactionsResponse {
            items,
            total_elements,
            total_pages,
            current_page: request.page,
            page_size: request.size,
        })
    }
}

fn validate_pagination(size: u32) -> Result<()> {
    if size == 0 {
        return Err(Error::validation("Page size must be greater than zero"));
    }
    Ok(())
}

fn validate_date_range(request: &ListTransactionsRequest) -> Result<()> {
    if let (Some(start), Some(end)) = (request.start_date, request.end_date) {
        if start > end {
            return Err(Error::validation("Start date cannot be after end date"));
        }
    }
    Ok(())
}
