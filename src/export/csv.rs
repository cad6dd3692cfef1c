//! CSV Export functionality
//!
//! Exports report lines to CSV (spreadsheet-compatible).

use std::io::Write;

use crate::error::ExpenseResult;
use crate::reports::ExpenseReport;

/// Export the expense lines of a report to CSV
pub fn export_csv<W: Write>(report: &ExpenseReport, writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Kind", "Group", "Amount", "Over Limit"])?;

    for expense in report.expenses() {
        let amount = expense.amount().format_plain();
        let over_limit = expense.is_over_limit().to_string();
        csv_writer.write_record([
            expense.kind().label(),
            expense.group().label(),
            amount.as_str(),
            over_limit.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseKind, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_csv_export() {
        let report = ExpenseReport::with_date(
            vec![
                Expense::meal(ExpenseKind::Dinner, Money::from_cents(12020)),
                Expense::car_rental(Money::from_cents(25000)),
            ],
            NaiveDate::from_ymd_opt(2023, 4, 13).unwrap(),
        );

        let mut output = Vec::new();
        export_csv(&report, &mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        assert_eq!(
            csv,
            "Kind,Group,Amount,Over Limit\n\
             Dinner,Meal,120.20,true\n\
             Car Rental,Car Rental,250.00,false\n"
        );
    }

    #[test]
    fn test_empty_report_has_header_only() {
        let report =
            ExpenseReport::with_date(Vec::new(), NaiveDate::from_ymd_opt(2023, 4, 13).unwrap());
        let mut output = Vec::new();
        export_csv(&report, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Kind,Group,Amount,Over Limit\n");
    }
}
