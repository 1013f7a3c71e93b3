//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::{schema, DbError};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default wait for a pooled connection, and for the first connect.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Pool sizing
#[derive(Debug, Clone, Copy)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

/// Create a PostgreSQL connection pool with custom options.
///
/// `connect` opens a first connection eagerly, so an unreachable backend
/// fails here, after at most `acquire_timeout`, rather than on the first
/// request.
pub async fn create_pool_with_options(
    database_url: &str,
    config: PoolConfig,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(database_url)
        .await
}

/// Open the pool and make sure the `expenses` table exists.
///
/// # Errors
///
/// [`DbError::Connection`] if the backend is unreachable,
/// [`DbError::Schema`] if the table cannot be created.
///
/// # Example
///
/// ```ignore
/// let pool = initialize("postgres://localhost/expenses", PoolConfig::default()).await?;
/// ```
pub async fn initialize(database_url: &str, config: PoolConfig) -> Result<PgPool, DbError> {
    let pool = create_pool_with_options(database_url, config)
        .await
        .map_err(DbError::Connection)?;
    tracing::info!(max_connections = config.max_connections, "connected to database");

    schema::bootstrap(&pool).await?;
    Ok(pool)
}
