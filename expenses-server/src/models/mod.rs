//! Domain models
//!
//! The API accepts any decodable body; there is no field validation
//! beyond what serde enforces on types.

pub mod expense;

pub use expense::{Expense, ExpenseId, ExpenseRow};
