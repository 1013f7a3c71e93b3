//! Persistence capability used by the HTTP layer
//!
//! Handlers only see `dyn ExpenseStore`, so the router can run against
//! Postgres in production and against [`MemoryExpenseStore`] in tests.
//!
//! [`MemoryExpenseStore`]: super::memory::MemoryExpenseStore

use async_trait::async_trait;

use crate::models::{Expense, ExpenseId};
use super::DbError;

#[async_trait]
pub trait ExpenseStore: Send + Sync + 'static {
    /// Insert every field except `id`; returns the assigned id.
    async fn insert(&self, expense: &Expense) -> Result<ExpenseId, DbError>;

    /// Fetch exactly one record.
    async fn get(&self, id: ExpenseId) -> Result<Expense, DbError>;

    /// Replace all fields of `id` and return the stored row.
    async fn update(&self, id: ExpenseId, expense: &Expense) -> Result<Expense, DbError>;

    /// Every record, ordered by id.
    async fn list(&self) -> Result<Vec<Expense>, DbError>;
}
