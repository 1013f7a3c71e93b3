//! In-process expense store
//!
//! Same contract as the Postgres repository: ids start at 1 and are never
//! reused, missing rows are `DbError::NotFound`. Used by the router tests
//! and handy for running the server without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{Expense, ExpenseId};
use super::{DbError, ExpenseStore};

#[derive(Default)]
struct Inner {
    last_id: ExpenseId,
    rows: BTreeMap<ExpenseId, Expense>,
}

/// Expense store kept in a `BTreeMap`
#[derive(Default)]
pub struct MemoryExpenseStore {
    inner: RwLock<Inner>,
}

impl MemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ExpenseStore for MemoryExpenseStore {
    async fn insert(&self, expense: &Expense) -> Result<ExpenseId, DbError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = inner.last_id;
        inner.rows.insert(id, expense.clone().with_id(id));
        Ok(id)
    }

    async fn get(&self, id: ExpenseId) -> Result<Expense, DbError> {
        self.inner
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(DbError::NotFound(id))
    }

    async fn update(&self, id: ExpenseId, expense: &Expense) -> Result<Expense, DbError> {
        let mut inner = self.inner.write().await;
        let row = inner
            .rows
            .get_mut(&id)
            .ok_or(DbError::NotFound(id))?;
        *row = expense.clone().with_id(id);
        Ok(row.clone())
    }

    async fn list(&self) -> Result<Vec<Expense>, DbError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }
}
