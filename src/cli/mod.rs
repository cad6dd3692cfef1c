//! CLI command handlers
//!
//! Bridges the clap argument parsing in `main` with report generation.

pub mod report;

pub use report::{handle_report_command, OutputFormat, ReportOptions};
