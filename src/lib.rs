//! Travel Expenses - daily travel expense report
//!
//! This library models a day's travel expenses, flags entries above their
//! per-kind spending limit, and renders a report with meal and grand totals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money and expense entries
//! - `reports`: The daily expense report
//! - `clock`: Injectable date source
//! - `config`: Display settings
//! - `export`: JSON, YAML and CSV renderings
//! - `cli`: Command handling for the binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use travel_expenses::clock::FixedClock;
//! use travel_expenses::models::{Expense, ExpenseKind, Money};
//! use travel_expenses::reports::ExpenseReport;
//!
//! let date = NaiveDate::from_ymd_opt(2023, 4, 13).unwrap();
//! let report = ExpenseReport::new(
//!     vec![Expense::meal(ExpenseKind::Dinner, Money::from_cents(12020))],
//!     &FixedClock(date),
//! );
//! assert_eq!(report.total().to_string(), "120.20eur");
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod sample;

pub use error::{ExpenseError, ExpenseResult};
