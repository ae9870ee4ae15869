//! Trait definitions for external dependencies

mod repository;

pub use repository::{
    CategoryRepository, TransactionFilter, TransactionRepository, UserRepository,
};
