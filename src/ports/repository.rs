//! Repository ports - persistence abstraction
//!
//! These traits define every persistence operation the use-case layer
//! needs. Implementations (adapters) live outside this crate and provide
//! the actual storage; the use cases depend only on these traits.
//!
//! Atomicity across multiple calls is the adapter's concern. A use case
//! that reads, checks and then writes gets no transactional wrapping here.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::{Category, Email, Transaction, TransactionType, User};

/// User persistence abstraction
pub trait UserRepository: Send + Sync {
    /// Persist a user (insert or update), returning the stored value
    fn save(&self, user: User) -> Result<User>;

    /// Look up a user by id
    fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// Look up a user by normalized email
    fn find_by_email(&self, email: &Email) -> Result<Option<User>>;

    /// Whether a user with this email exists
    fn exists_by_email(&self, email: &Email) -> Result<bool>;

    /// Delete a user by id
    fn delete_by_id(&self, id: Uuid) -> Result<()>;
}

/// Category persistence abstraction
pub trait CategoryRepository: Send + Sync {
    /// Persist a category (insert or update), returning the stored value
    fn save(&self, category: Category) -> Result<Category>;

    /// Look up a category by id
    fn find_by_id(&self, id: Uuid) -> Result<Option<Category>>;

    /// Delete a category by id
    fn delete_by_id(&self, id: Uuid) -> Result<()>;
}

/// Filter criteria for transaction listings
///
/// Date bounds are inclusive; type and category filters are exact matches.
/// Enforcing those semantics is part of the adapter's contract.
#[derive(Debug, Clone)]
pub struct TransactionFilter {
    pub user_id: Uuid,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub kind: Option<TransactionType>,
    pub category_id: Option<Uuid>,
}

/// Transaction persistence abstraction
pub trait TransactionRepository: Send + Sync {
    /// Persist a transaction (insert or update), returning the stored value
    fn save(&self, transaction: Transaction) -> Result<Transaction>;

    /// Look up a transaction by id
    fn find_by_id(&self, id: Uuid) -> Result<Option<Transaction>>;

    /// Delete a transaction by id
    fn delete_by_id(&self, id: Uuid) -> Result<()>;

    /// Fetch one page of a user's transactions matching the filter
    ///
    /// `page` is 0-based; `size` is the page length.
    fn find_with_filters(
        &self,
        filter: &TransactionFilter,
        page: u32,
        size: u32,
    ) -> Result<Vec<Transaction>>;

    /// Count all of a user's transactions matching the filter
    fn count_with_filters(&self, filter: &TransactionFilter) -> Result<u64>;
}
