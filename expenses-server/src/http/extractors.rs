//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use serde::de::DeserializeOwned;

use crate::models::ExpenseId;
use super::error::ApiError;

/// Parse an expense id from its path segment.
pub fn parse_expense_id(raw: &str) -> Result<ExpenseId, ApiError> {
    raw.parse::<ExpenseId>().map_err(|e| ApiError::InvalidId {
        message: format!("invalid expense id '{}': {}", raw, e),
    })
}

/// Extract an integer expense id from path
pub struct ExpenseIdPath(pub ExpenseId);

impl<S> FromRequestParts<S> for ExpenseIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::InvalidId {
                message: e.body_text(),
            })?;

        Ok(Self(parse_expense_id(&raw)?))
    }
}

/// JSON body that rejects with 400 and a `{message}` body.
///
/// An empty body yields `T::default()` whatever its `Content-Type`; a
/// non-empty body must be declared `application/json`.
pub struct JsonBody<T>(pub T);

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json_declared = is_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Decode {
                message: e.body_text(),
            })?;

        if bytes.is_empty() {
            return Ok(Self(T::default()));
        }
        if !json_declared {
            return Err(ApiError::Decode {
                message: "expected request with `Content-Type: application/json`".to_owned(),
            });
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| ApiError::Decode {
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use axum::body::Body;

    #[test]
    fn parses_integer_ids() {
        assert_eq!(parse_expense_id("12").unwrap(), 12);
        assert!(matches!(
            parse_expense_id("abc"),
            Err(ApiError::InvalidId { .. })
        ));
        assert!(parse_expense_id("99999999999").is_err());
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = Request::builder().method("POST");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn json_body_decodes_declared_json() {
        let req = request(Some("application/json; charset=utf-8"), r#"{"title":"t"}"#);
        let JsonBody(expense): JsonBody<Expense> =
            JsonBody::from_request(req, &()).await.unwrap();
        assert_eq!(expense.title, "t");
    }

    #[tokio::test]
    async fn non_json_content_type_is_decode_error() {
        let req = request(Some("text/plain"), r#"{"title":"t"}"#);
        let result = JsonBody::<Expense>::from_request(req, &()).await;
        assert!(matches!(result, Err(ApiError::Decode { .. })));

        let req = request(None, r#"{"title":"t"}"#);
        let result = JsonBody::<Expense>::from_request(req, &()).await;
        assert!(matches!(result, Err(ApiError::Decode { .. })));
    }

    #[tokio::test]
    async fn empty_body_is_default_value() {
        for content_type in [Some("application/json"), Some("text/plain"), None] {
            let req = request(content_type, "");
            let JsonBody(expense): JsonBody<Expense> =
                JsonBody::from_request(req, &()).await.unwrap();
            assert_eq!(expense, Expense::default());
        }
    }

    #[tokio::test]
    async fn malformed_json_is_decode_error() {
        let req = request(Some("application/json"), "{not json");
        let result = JsonBody::<Expense>::from_request(req, &()).await;
        assert!(matches!(result, Err(ApiError::Decode { .. })));
    }
}
