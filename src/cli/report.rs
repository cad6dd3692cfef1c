//! CLI handling for the daily report
//!
//! Resolves the report date, builds the sample report and writes it in the
//! requested format.

use chrono::NaiveDate;
use clap::ValueEnum;
use std::io::Write;
use tracing::info;

use crate::clock::{FixedClock, SystemClock};
use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_csv, export_json, export_yaml};
use crate::reports::ExpenseReport;
use crate::sample::sample_expenses;

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated text for the terminal
    #[default]
    Text,
    /// Pretty-printed JSON snapshot
    Json,
    /// YAML snapshot
    Yaml,
    /// CSV expense lines
    Csv,
}

/// Options for a report run
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Report date override (YYYY-MM-DD)
    pub date: Option<String>,
    pub format: OutputFormat,
    /// Group text lines by category
    pub by_category: bool,
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_report_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!("Invalid report date: {}. Use YYYY-MM-DD", s))
    })
}

/// Build the sample report, dated by the override or the system clock
pub fn build_report(date: Option<&str>) -> ExpenseResult<ExpenseReport> {
    let report = match date {
        Some(s) => ExpenseReport::new(sample_expenses(), &FixedClock(parse_report_date(s)?)),
        None => ExpenseReport::new(sample_expenses(), &SystemClock),
    };
    Ok(report)
}

/// Handle a report run, writing the output to `writer`
pub fn handle_report_command<W: Write>(
    options: &ReportOptions,
    settings: &Settings,
    writer: &mut W,
) -> ExpenseResult<()> {
    if options.by_category && options.format != OutputFormat::Text {
        return Err(ExpenseError::Validation(format!(
            "--by-category applies to text output only, not {:?}",
            options.format
        )));
    }

    let report = build_report(options.date.as_deref())?;
    info!(date = %report.date(), format = ?options.format, "rendering report");

    match options.format {
        OutputFormat::Text => {
            let settings = Settings {
                show_by_category: options.by_category || settings.show_by_category,
                ..settings.clone()
            };
            report.write_to(writer, &settings)
        }
        OutputFormat::Json => export_json(&report, writer, true),
        OutputFormat::Yaml => export_yaml(&report, writer),
        OutputFormat::Csv => export_csv(&report, writer),
    }
}
