//! Greeting at the service root

use axum::{routing::get, Router};

/// GET /
async fn hello() -> &'static str {
    "Hello, World!"
}

/// Root route
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(hello))
}
