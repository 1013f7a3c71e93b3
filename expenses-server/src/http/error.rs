//! API error types with IntoResponse
//!
//! Every failure is rendered as `{"message": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body is not a decodable expense (400)
    #[error("{message}")]
    Decode { message: String },

    /// Path id is not an integer (500, kept as the service always answered)
    #[error("{message}")]
    InvalidId { message: String },

    /// Missing or wrong Authorization header (401)
    #[error("unauthorized")]
    Unauthorized,

    /// Storage failure, including a missing row (500, logged)
    #[error(transparent)]
    Database(#[from] DbError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Decode { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            // A missing row is a 500 here, not a 404.
            Self::InvalidId { .. } | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Database(DbError::NotFound(_)) => tracing::debug!("{}", self),
            Self::Database(e) => tracing::error!("Database error: {}", e),
            Self::InvalidId { message } => tracing::debug!("invalid id: {}", message),
            _ => {}
        }

        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
