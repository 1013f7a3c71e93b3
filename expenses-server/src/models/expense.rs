//! Expense record - the single entity served by the API
//!
//! Decoding is lenient: missing fields fall back to zero values and a
//! `null` tag list becomes empty. Responses always carry `id` and `tags`.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// Storage-assigned identifier (`SERIAL` column)
pub type ExpenseId = i32;

/// Expense record as exchanged over HTTP
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Ignored on input; the path or the database decides the id.
    #[serde(default)]
    pub id: ExpenseId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub note: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

impl Expense {
    /// Return a copy carrying the given id.
    pub fn with_id(mut self, id: ExpenseId) -> Self {
        self.id = id;
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Row as stored in `expenses`; every column but `id` is nullable.
#[derive(Debug, Clone, FromRow)]
pub struct ExpenseRow {
    pub id: ExpenseId,
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub note: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl From<ExpenseRow> for Expense {
    fn from(row: ExpenseRow) -> Self {
        Self {
            id: row.id,
            title: row.title.unwrap_or_default(),
            amount: row.amount.unwrap_or_default(),
            note: row.note.unwrap_or_default(),
            tags: row.tags.unwrap_or_default(),
        }
    }
}
