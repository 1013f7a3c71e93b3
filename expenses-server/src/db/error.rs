//! Persistence error taxonomy

use crate::models::ExpenseId;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Backend unreachable while opening the pool. Fatal at startup.
    #[error("connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    /// Table bootstrap failed. Fatal at startup.
    #[error("create table: {0}")]
    Schema(#[source] sqlx::Error),

    /// Any runtime statement failure.
    #[error("database error: {0}")]
    Query(#[from] sqlx::Error),

    /// No row matches the id.
    #[error("not found: expense '{0}'")]
    NotFound(ExpenseId),
}
