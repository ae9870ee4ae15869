//! Finance Core - domain and use-case logic for personal finance bookkeeping
//!
//! This crate implements the core business logic following hexagonal
//! architecture:
//!
//! - **domain**: Value objects (Money, Email, DateRange) and entities
//!   (User, Transaction, Category, Budget, FinancialGoal)
//! - **ports**: Trait definitions for persistence (the repository ports)
//! - **usecases**: Application logic orchestrating entities and ports
//!
//! Persistence adapters and the HTTP transport live outside this crate and
//! plug into the ports.

pub mod domain;
pub mod ports;
pub mod usecases;

use std::sync::Arc;

use ports::{CategoryRepository, TransactionRepository, UserRepository};
use usecases::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{
    Budget, Category, Currency, DateRange, Email, FinancialGoal, Money, Transaction,
    TransactionType, User,
};

/// Main context for finance-core operations
///
/// The primary entry point for callers: wires every use case to the
/// repository implementations supplied by the hosting application.
pub struct FinanceContext {
    pub create_user: CreateUserUseCase,
    pub authenticate_user: AuthenticateUserUseCase,
    pub create_transaction: CreateTransactionUseCase,
    pub update_transaction: UpdateTransactionUseCase,
    pub delete_transaction: DeleteTransactionUseCase,
    pub list_transactions: ListTransactionsUseCase,
}

impl FinanceContext {
    /// Create a new context from repository implementations
    pub fn new(
        users: Arc<dyn UserRepository>,
        transactions: Arc<dyn TransactionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            create_user: CreateUserUseCase::new(Arc::clone(&users)),
            authenticate_user: AuthenticateUserUseCase::new(Arc::clone(&users)),
            create_transaction: CreateTransactionUseCase::new(
                Arc::clone(&transactions),
                Arc::clone(&users),
                Arc::clone(&categories),
            ),
            update_transaction: UpdateTransactionUseCase::new(
                Arc::clone(&transactions),
                Arc::clone(&categories),
            ),
            delete_transaction: DeleteTransactionUseCase::new(Arc::clone(&transactions)),
            list_transactions: ListTransactionsUseCase::new(transactions, users),
        }
    }
}
