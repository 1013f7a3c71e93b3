//! expenses-server: HTTP CRUD service for expense records
//!
//! Layers, leaf to root:
//! - [`models`]: the `Expense` record and its row mapping
//! - [`db`]: pool lifecycle, table bootstrap and the `ExpenseStore` capability
//! - [`http`]: axum routes, auth middleware and error mapping

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, ExpenseRepo, ExpenseStore, MemoryExpenseStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{Expense, ExpenseId};
