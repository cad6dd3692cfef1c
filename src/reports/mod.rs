//! Reports module for travel expenses
//!
//! Provides the daily expense report with meal and grand totals.

pub mod daily;

pub use daily::{CategoryExpenses, ExpenseReport};
