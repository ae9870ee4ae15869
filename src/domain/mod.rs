//! Core domain model
//!
//! Value objects and entities are defined here. These are pure data
//! structures with validation logic - no I/O or external dependencies.
//! Entities are created exclusively through `create` factories that check
//! every invariant before an instance exists.

mod budget;
mod category;
mod date_range;
mod email;
mod goal;
mod money;
pub mod result;
mod transaction;
mod user;

pub use budget::Budget;
pub use category::Category;
pub use date_range::DateRange;
pub use email::Email;
pub use goal::FinancialGoal;
pub use money::{Currency, Money};
pub use transaction::{Transaction, TransactionType};
pub use user::User;
