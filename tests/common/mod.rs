//! Shared test fixtures: in-memory repository fakes
//!
//! The repository ports are the mock seam. These fakes keep everything in
//! a `Mutex<HashMap>` and implement the same filter contract a real
//! adapter would (inclusive date bounds, exact type/category matches).

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use finance_core::domain::result::Result;
use finance_core::ports::{
    CategoryRepository, TransactionFilter, TransactionRepository, UserRepository,
};
use finance_core::{Category, Email, Transaction, User};

/// Install the fmt subscriber for the test binary so use-case events show
/// up under `RUST_LOG`. Safe to call from every test; only the first call
/// installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn save(&self, user: User) -> Result<User> {
        self.users.lock().unwrap().insert(user.id(), user.clone());
        Ok(user)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    fn find_by_email(&self, email: &Email) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email() == email)
            .cloned())
    }

    fn exists_by_email(&self, email: &Email) -> Result<bool> {
        Ok(self.find_by_email(email)?.is_some())
    }

    fn delete_by_id(&self, id: Uuid) -> Result<()> {
        self.users.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: Mutex<HashMap<Uuid, Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CategoryRepository for InMemoryCategoryRepository {
    fn save(&self, category: Category) -> Result<Category> {
        self.categories
            .lock()
            .unwrap()
            .insert(category.id(), category.clone());
        Ok(category)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        Ok(self.categories.lock().unwrap().get(&id).cloned())
    }

    fn delete_by_id(&self, id: Uuid) -> Result<()> {
        self.categories.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryTransactionRepository {
    transactions: Mutex<HashMap<Uuid, Transaction>>,
    save_calls: AtomicUsize,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `save` was invoked, across all transactions
    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.transactions.lock().unwrap().contains_key(&id)
    }

    fn matching(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        let mut matches: Vec<Transaction> = self
            .transactions
            .lock()
            .unwrap()
            .values()
            .filter(|tx| tx.user_id() == filter.user_id)
            .filter(|tx| {
                filter
                    .start_date
                    .is_none_or(|start| tx.transaction_date().date() >= start)
            })
            .filter(|tx| {
                filter
                    .end_date
                    .is_none_or(|end| tx.transaction_date().date() <= end)
            })
            .filter(|tx| filter.kind.is_none_or(|kind| tx.kind() == kind))
            .filter(|tx| {
                filter
                    .category_id
                    .is_none_or(|category| tx.category_id() == Some(category))
            })
            .cloned()
            .collect();
        // Deterministic order for pagination assertions
        matches.sort_by_key(|tx| (tx.transaction_date(), tx.id()));
        matches
    }
}

impl TransactionRepository for InMemoryTransactionRepository {
    fn save(&self, transaction: Transaction) -> Result<Transaction> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.transactions
            .lock()
            .unwrap()
            .insert(transaction.id(), transaction.clone());
        Ok(transaction)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Transaction>> {
        Ok(self.transactions.lock().unwrap().get(&id).cloned())
    }

    fn delete_by_id(&self, id: Uuid) -> Result<()> {
        self.transactions.lock().unwrap().remove(&id);
        Ok(())
    }

    fn find_with_filters(
        &self,
        filter: &TransactionFilter,
        page: u32,
        size: u32,
    ) -> Result<Vec<Transaction>> {
        let offset = page as usize * size as usize;
        Ok(self
            .matching(filter)
            .into_iter()
            .skip(offset)
            .take(size as usize)
            .collect())
    }

    fn count_with_filters(&self, filter: &TransactionFilter) -> Result<u64> {
        Ok(self.matching(filter).len() as u64)
    }
}
