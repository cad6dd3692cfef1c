//! Export module for travel expense reports
//!
//! Provides machine-readable renderings of a daily report:
//! - CSV: expense lines (spreadsheet-compatible)
//! - JSON: full report snapshot with totals
//! - YAML: the same snapshot, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_csv;
pub use json::{export_json, import_from_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
