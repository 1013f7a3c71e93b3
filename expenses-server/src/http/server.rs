//! Axum server setup
//!
//! Server skeleton with:
//! - Static-token auth ahead of every route (when configured)
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::auth::{require_auth_token, AuthToken};
use super::routes;
use crate::db::ExpenseStore;

/// Default listen port
pub const DEFAULT_PORT: u16 = 2565;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:2565)
    pub bind_addr: SocketAddr,

    /// Secret the `Authorization` header must equal. `None` disables the check.
    pub auth_token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            auth_token: None,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ExpenseStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self { store }
    }
}

/// Build the router with every route and middleware applied.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let mut app = Router::new()
        .merge(routes::root::router::<AppState>())
        .merge(routes::expenses::router());

    match config.auth_token.as_deref() {
        Some(token) => {
            app = app.layer(middleware::from_fn_with_state(
                AuthToken::new(token),
                require_auth_token,
            ));
        }
        None => tracing::warn!("AUTH: no token configured - requests are not authenticated"),
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = initialize(&database_url, PoolConfig::default()).await?;
/// run_server(Arc::new(ExpenseRepo::new(pool)), ServerConfig::default()).await?;
/// ```
pub async fn run_server(
    store: Arc<dyn ExpenseStore>,
    config: ServerConfig,
) -> Result<(), ServerError> {
    let app = build_router(AppState::new(store), &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
