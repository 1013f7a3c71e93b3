//! Database layer - connection pool, schema bootstrap and stores
//!
//! - Connection pool, no Arc<Mutex<Connection>>
//! - Positional parameters only, never interpolated SQL
//! - Handlers depend on the `ExpenseStore` trait, not on Postgres

pub mod error;
pub mod memory;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

pub use error::DbError;
pub use memory::MemoryExpenseStore;
pub use pool::{
    create_pool_with_options, initialize, PoolConfig, DEFAULT_ACQUIRE_TIMEOUT,
    DEFAULT_MAX_CONNECTIONS,
};
pub use repos::ExpenseRepo;
pub use store::ExpenseStore;
