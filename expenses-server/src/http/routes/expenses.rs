//! Expense endpoints
//!
//! One route, one store call. Bodies are decoded leniently; see
//! [`crate::models::Expense`].

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{parse_expense_id, ExpenseIdPath, JsonBody};
use crate::http::server::AppState;
use crate::models::Expense;

/// POST /expenses - create an expense
async fn create_expense(
    State(state): State<AppState>,
    JsonBody(expense): JsonBody<Expense>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let id = state.store.insert(&expense).await?;
    tracing::info!(id, "expense created");

    Ok((StatusCode::CREATED, Json(expense.with_id(id))))
}

/// GET /expenses/{id} - get a single expense
async fn get_expense(
    State(state): State<AppState>,
    ExpenseIdPath(id): ExpenseIdPath,
) -> Result<Json<Expense>, ApiError> {
    let expense = state.store.get(id).await?;
    Ok(Json(expense))
}

/// PUT /expenses/{id} - replace every field of an expense
///
/// The body is decoded before the id is parsed, so a bad body wins (400).
async fn update_expense(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(expense): JsonBody<Expense>,
) -> Result<Json<Expense>, ApiError> {
    let id = parse_expense_id(&raw_id)?;
    let updated = state.store.update(id, &expense).await?;
    tracing::info!(id, "expense updated");

    Ok(Json(updated))
}

/// GET /expenses - list every expense
async fn list_expenses(State(state): State<AppState>) -> Result<Json<Vec<Expense>>, ApiError> {
    let expenses = state.store.list().await?;
    Ok(Json(expenses))
}

/// Expense routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/{id}", get(get_expense).put(update_expense))
}
