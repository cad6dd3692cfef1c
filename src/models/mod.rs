//! Core data models for travel expenses
//!
//! This module contains the money type and the expense entries a report
//! is built from.

pub mod expense;
pub mod money;

pub use expense::{Expense, ExpenseGroup, ExpenseKind, OVER_LIMIT_MARKER};
pub use money::{Money, CURRENCY_SUFFIX};
