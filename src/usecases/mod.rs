//! Use-case layer - application logic orchestration
//!
//! Each use case coordinates one request: validate input, load entities
//! through the repository ports, invoke entity methods, persist, and map
//! the result to a response record. Use cases are stateless; the same
//! instance can serve any number of requests.

mod authenticate_user;
mod create_transaction;
mod create_user;
mod delete_transaction;
pub mod dto;
mod list_transactions;
mod update_transaction;

pub use authenticate_user::AuthenticateUserUseCase;
pub use create_transaction::CreateTransactionUseCase;
pub use create_user::CreateUserUseCase;
pub use delete_transaction::DeleteTransactionUseCase;
pub use list_transactions::ListTransactionsUseCase;
pub use update_transaction::UpdateTransactionUseCase;
