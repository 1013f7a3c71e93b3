//! HTTP server layer
//!
//! Axum server with:
//! - Expense CRUD routes
//! - Static Authorization token check
//! - Request tracing
//! - Graceful shutdown
//! - JSON `{message}` error responses

pub mod auth;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError, DEFAULT_PORT};
