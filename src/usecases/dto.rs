//! Request and response records for the use-case layer
//!
//! Plain data carriers crossing the boundary between the transport layer
//! and the use cases. Requests deserialize from the wire; responses
//! serialize back. Responses never carry credentials or hashes.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Transaction, TransactionType, User};

/// Input for [`crate::usecases::CreateUserUseCase`]
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A user as seen by callers; the password hash never leaves the core
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl UserResponse {
    pub(crate) fn from_entity(user: &User) -> Self {
        Self {
            id: user.id(),
            name: user.name().to_string(),
            email: user.email().as_str().to_string(),
            created_at: user.created_at(),
        }
    }
}

/// Input for [`crate::usecases::AuthenticateUserUseCase`]
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticationRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication result
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticationResponse {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub token: String,
}

/// Input for [`crate::usecases::CreateTransactionUseCase`]
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransactionRequest {
    pub user_id: Uuid,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub description: String,
    pub date: NaiveDate,
    pub category_id: Option<Uuid>,
}

/// Input for [`crate::usecases::UpdateTransactionUseCase`]
///
/// Sparse update: `None` means "leave unchanged". Amount, type and date are
/// immutable after creation; supplying any of them is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTransactionRequest {
    pub transaction_id: Uuid,
    pub amount: Option<Decimal>,
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub category_id: Option<Uuid>,
}

/// Input for [`crate::usecases::DeleteTransactionUseCase`]
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteTransactionRequest {
    pub transaction_id: Uuid,
}

/// Input for [`crate::usecases::ListTransactionsUseCase`]
///
/// All filters are optional; `page` is 0-based.
#[derive(Debug, Clone, Deserialize)]
pub struct ListTransactionsRequest {
    pub user_id: Uuid,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
    pub category_id: Option<Uuid>,
    pub page: u32,
    pub size: u32,
}

/// A transaction as seen by callers
#[derive(Debug, Clone, Serialize)]
pub struct TransactionResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub description: String,
    pub date: NaiveDate,
    pub category_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl TransactionResponse {
    pub(crate) fn from_entity(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id(),
            user_id: transaction.user_id(),
            amount: transaction.amount().amount(),
            kind: transaction.kind(),
            description: transaction.description().to_string(),
            date: transaction.transaction_date().date(),
            category_id: transaction.category_id(),
            created_at: transaction.created_at(),
        }
    }
}

/// One page of transactions plus pagination bookkeeping
#[derive(Debug, Clone, Serialize)]
pub struct PagedTransactionsResponse {
    pub items: Vec<TransactionResponse>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub page_size: u32,
}
