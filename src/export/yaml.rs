//! YAML Export functionality
//!
//! Exports a daily report to YAML for human-readable archiving.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::ReportExport;
use crate::reports::ExpenseReport;

/// Export a report to YAML
pub fn export_yaml<W: Write>(report: &ExpenseReport, writer: &mut W) -> ExpenseResult<()> {
    let export = ReportExport::from_report(report);

    writeln!(writer, "# Travel Expenses {}", export.date)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export)?;

    Ok(())
}
