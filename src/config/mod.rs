//! Configuration module for the expense report
//!
//! Display settings loaded from an optional JSON file.

pub mod settings;

pub use settings::Settings;
