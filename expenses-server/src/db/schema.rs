//! Table bootstrap
//!
//! The DDL is idempotent, so running it on every start is safe.

use sqlx::PgPool;

use super::DbError;

/// `CREATE TABLE IF NOT EXISTS expenses (...)`
pub const CREATE_TABLE_SQL: &str = include_str!("../../sql/create_table.sql");

/// Ensure the `expenses` table exists.
pub async fn bootstrap(pool: &PgPool) -> Result<(), DbError> {
    sqlx::query(CREATE_TABLE_SQL)
        .execute(pool)
        .await
        .map_err(DbError::Schema)?;

    tracing::info!("expenses table ready");
    Ok(())
}
