//! JSON Export functionality
//!
//! Exports a daily report as a machine-readable snapshot with schema
//! versioning.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseGroup, ExpenseKind, Money};
use crate::reports::ExpenseReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// One expense line in an export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedExpense {
    pub kind: ExpenseKind,
    pub group: ExpenseGroup,
    /// Amount with two decimals and no suffix, e.g. "15.20"
    pub amount: String,
    pub amount_cents: i64,
    pub over_limit: bool,
}

impl From<&Expense> for ExportedExpense {
    fn from(expense: &Expense) -> Self {
        Self {
            kind: expense.kind(),
            group: expense.group(),
            amount: expense.amount().format_plain(),
            amount_cents: expense.amount().cents(),
            over_limit: expense.is_over_limit(),
        }
    }
}

/// Serializable snapshot of a daily report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Application version that created the export
    pub app_version: String,

    /// Report date
    pub date: NaiveDate,

    /// Expenses in report order
    pub expenses: Vec<ExportedExpense>,

    /// Meal subtotal, two decimals
    pub meal_expenses: String,

    /// Grand total, two decimals
    pub total: String,
}

impl ReportExport {
    /// Snapshot a report
    pub fn from_report(report: &ExpenseReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            date: report.date(),
            expenses: report.expenses().iter().map(ExportedExpense::from).collect(),
            meal_expenses: report.meal_expenses().format_plain(),
            total: report.total().format_plain(),
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        for (index, expense) in self.expenses.iter().enumerate() {
            let expected = Money::from_cents(expense.amount_cents).format_plain();
            if expected != expense.amount {
                return Err(format!(
                    "Expense {} amount mismatch: {} cents, export says {}",
                    index, expense.amount_cents, expense.amount
                ));
            }
        }

        let total: Money = self
            .expenses
            .iter()
            .map(|e| Money::from_cents(e.amount_cents))
            .sum();
        let meal_total: Money = self
            .expenses
            .iter()
            .filter(|e| e.group == ExpenseGroup::Meal)
            .map(|e| Money::from_cents(e.amount_cents))
            .sum();

        check_sum("Total", total, &self.total)?;
        check_sum("Meal expenses", meal_total, &self.meal_expenses)?;

        Ok(())
    }
}

fn check_sum(label: &str, expected: Money, exported: &str) -> Result<(), String> {
    let expected = expected.format_plain();
    if expected != exported {
        return Err(format!(
            "{} mismatch: expenses sum to {}, export says {}",
            label, expected, exported
        ));
    }
    Ok(())
}

/// Export a report to JSON
pub fn export_json<W: Write>(
    report: &ExpenseReport,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = ReportExport::from_report(report);
    debug!(count = export.expenses.len(), pretty, "exporting report as JSON");

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}

/// Read back a JSON export
pub fn import_from_json(json_str: &str) -> ExpenseResult<ReportExport> {
    let export: ReportExport = serde_json::from_str(json_str)?;
    export.validate().map_err(ExpenseError::Validation)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_expenses;

    fn sample_report() -> ExpenseReport {
        ExpenseReport::with_date(
            sample_expenses(),
            NaiveDate::from_ymd_opt(2023, 4, 13).unwrap(),
        )
    }

    #[test]
    fn test_snapshot_fields() {
        let export = ReportExport::from_report(&sample_report());
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.expenses.len(), 6);
        assert_eq!(export.meal_expenses, "169.50");
        assert_eq!(export.total, "419.50");
        assert!(export.expenses[4].over_limit);
        assert!(!export.expenses[3].over_limit);
        assert_eq!(export.expenses[5].group, ExpenseGroup::CarRental);
    }

    #[test]
    fn test_json_export() {
        let mut output = Vec::new();
        export_json(&sample_report(), &mut output, true).unwrap();

        let json = String::from_utf8(output).unwrap();
        assert!(json.contains("\"date\": \"2023-04-13\""));
        assert!(json.contains("\"kind\": \"Car Rental\""));
        assert!(json.contains("\"total\": \"419.50\""));

        let imported = import_from_json(&json).unwrap();
        assert_eq!(imported, ReportExport::from_report(&sample_report()));
    }

    #[test]
    fn test_import_rejects_wrong_schema() {
        let mut export = ReportExport::from_report(&sample_report());
        export.schema_version = "0.1.0".into();
        let json = serde_json::to_string(&export).unwrap();

        let err = import_from_json(&json).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_import_rejects_inconsistent_total() {
        let mut export = ReportExport::from_report(&sample_report());
        export.total = "1.00".into();
        let json = serde_json::to_string(&export).unwrap();

        assert!(import_from_json(&json).is_err());
    }

    #[test]
    fn test_import_rejects_inconsistent_meal_total() {
        let mut export = ReportExport::from_report(&sample_report());
        export.meal_expenses = "419.50".into();
        let json = serde_json::to_string(&export).unwrap();

        let err = import_from_json(&json).unwrap_err();
        assert!(err.to_string().contains("Meal expenses mismatch"));
    }

    #[test]
    fn test_import_rejects_amount_not_matching_cents() {
        let mut export = ReportExport::from_report(&sample_report());
        export.expenses[0].amount = "99.99".into();
        let json = serde_json::to_string(&export).unwrap();

        let err = import_from_json(&json).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Expense 0 amount mismatch"));
    }
}
