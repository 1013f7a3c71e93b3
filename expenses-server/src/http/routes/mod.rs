//! Route handlers organized by resource

pub mod expenses;
pub mod root;
