//! Expense repository
//!
//! One statement per operation, all parameters bound positionally.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::{DbError, ExpenseStore};
use crate::models::{Expense, ExpenseId, ExpenseRow};

/// Postgres-backed expense store
#[derive(Clone)]
pub struct ExpenseRepo {
    pool: PgPool,
}

impl ExpenseRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExpenseStore for ExpenseRepo {
    async fn insert(&self, expense: &Expense) -> Result<ExpenseId, DbError> {
        let (id,): (ExpenseId,) = sqlx::query_as(
            r#"
            INSERT INTO expenses (title, amount, note, tags)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(expense.title.as_str())
        .bind(expense.amount)
        .bind(expense.note.as_str())
        .bind(expense.tags.as_slice())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id, "inserted expense");
        Ok(id)
    }

    async fn get(&self, id: ExpenseId) -> Result<Expense, DbError> {
        let row: ExpenseRow = sqlx::query_as(
            r#"
            SELECT id, title, amount, note, tags
            FROM expenses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DbError::NotFound(id))?;

        Ok(row.into())
    }

    async fn update(&self, id: ExpenseId, expense: &Expense) -> Result<Expense, DbError> {
        let row: ExpenseRow = sqlx::query_as(
            r#"
            UPDATE expenses
            SET title = $1, amount = $2, note = $3, tags = $4
            WHERE id = $5
            RETURNING id, title, amount, note, tags
            "#,
        )
        .bind(expense.title.as_str())
        .bind(expense.amount)
        .bind(expense.note.as_str())
        .bind(expense.tags.as_slice())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DbError::NotFound(id))?;

        tracing::debug!(id, "updated expense");
        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Expense>, DbError> {
        let rows: Vec<ExpenseRow> = sqlx::query_as(
            r#"
            SELECT id, title, amount, note, tags
            FROM expenses
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Expense::from).collect())
    }
}
