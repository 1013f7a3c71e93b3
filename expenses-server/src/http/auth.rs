//! Static token check applied ahead of every route

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use super::error::ApiError;

/// Configured `Authorization` secret
#[derive(Clone)]
pub struct AuthToken(Arc<str>);

impl AuthToken {
    pub fn new(token: &str) -> Self {
        Self(Arc::from(token))
    }

    /// Exact byte comparison with the presented header value.
    pub fn matches(&self, presented: Option<&[u8]>) -> bool {
        presented == Some(self.0.as_bytes())
    }
}

/// Reject requests whose `Authorization` header is not the configured token.
pub async fn require_auth_token(
    State(token): State<AuthToken>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let presented = request.headers().get(AUTHORIZATION).map(|v| v.as_bytes());
    if !token.matches(presented) {
        tracing::warn!(
            method = %request.method(),
            uri = %request.uri(),
            "rejected request with missing or invalid Authorization header"
        );
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}
