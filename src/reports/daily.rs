//! Daily Travel Expense Report
//!
//! Holds the expenses of a single day, computes the meal and grand totals,
//! and renders the report for the terminal.

use chrono::NaiveDate;
use std::fmt::Write as _;
use std::io::Write;
use tracing::debug;

use crate::clock::Clock;
use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseGroup, Money};

/// Expenses sharing one group label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryExpenses<'a> {
    /// The group label
    pub group: ExpenseGroup,
    /// Expenses in original report order
    pub expenses: Vec<&'a Expense>,
}

impl CategoryExpenses<'_> {
    /// Sum of the amounts in this group
    pub fn subtotal(&self) -> Money {
        self.expenses.iter().map(|e| e.amount()).sum()
    }
}

/// A report over one day's expenses
///
/// The report date is read once when the report is built and stays fixed
/// for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseReport {
    date: NaiveDate,
    expenses: Vec<Expense>,
}

impl ExpenseReport {
    /// Build a report dated by `clock`
    pub fn new(expenses: Vec<Expense>, clock: &impl Clock) -> Self {
        Self::with_date(expenses, clock.today())
    }

    /// Build a report for an explicit date
    pub fn with_date(expenses: Vec<Expense>, date: NaiveDate) -> Self {
        debug!(%date, count = expenses.len(), "building expense report");
        Self { date, expenses }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Sum of all expenses
    pub fn total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount()).sum()
    }

    /// Sum of expenses labelled `Meal`
    pub fn meal_expenses(&self) -> Money {
        self.expenses
            .iter()
            .filter(|e| e.group() == ExpenseGroup::Meal)
            .map(|e| e.amount())
            .sum()
    }

    /// Group expenses by label, in order of first occurrence
    pub fn expenses_by_category(&self) -> Vec<CategoryExpenses<'_>> {
        let mut groups: Vec<CategoryExpenses<'_>> = Vec::new();

        for expense in &self.expenses {
            match groups.iter_mut().find(|g| g.group == expense.group()) {
                Some(group) => group.expenses.push(expense),
                None => groups.push(CategoryExpenses {
                    group: expense.group(),
                    expenses: vec![expense],
                }),
            }
        }

        groups
    }

    /// Format the report for terminal display using default settings
    pub fn format_terminal(&self) -> String {
        self.render(&Settings::default())
    }

    /// Format the report with lines grouped by category
    pub fn format_by_category(&self) -> String {
        self.render(&Settings {
            show_by_category: true,
            ..Settings::default()
        })
    }

    /// Render the report according to `settings`
    pub fn render(&self, settings: &Settings) -> String {
        let suffix = settings.currency_suffix.as_str();
        let mut output = String::new();

        // Header
        output.push_str(&format!(
            "Today Travel Expenses {}\n",
            self.format_date(&settings.date_format)
        ));

        if settings.show_by_category {
            for category in self.expenses_by_category() {
                output.push_str(&format!("{}:\n", category.group));
                for expense in &category.expenses {
                    output.push_str(&format!("  {}\n", expense.describe_with_suffix(suffix)));
                }
                output.push_str(&format!(
                    "  Subtotal: {}\n",
                    category.subtotal().format_with_suffix(suffix)
                ));
            }
        } else {
            for expense in &self.expenses {
                output.push_str(&expense.describe_with_suffix(suffix));
                output.push('\n');
            }
        }

        // Totals
        output.push_str(&format!(
            "Meal expenses: {}\n",
            self.meal_expenses().format_with_suffix(suffix)
        ));
        output.push_str(&format!(
            "Total expenses: {}\n",
            self.total().format_with_suffix(suffix)
        ));

        output
    }

    /// Write the rendered report to `writer`
    pub fn write_to<W: Write>(&self, writer: &mut W, settings: &Settings) -> ExpenseResult<()> {
        writer
            .write_all(self.render(settings).as_bytes())
            .map_err(|e| ExpenseError::Io(format!("Failed to write report: {}", e)))?;
        writer.flush()?;
        Ok(())
    }

    /// Print the report to standard output
    pub fn print(&self) {
        print!("{}", self.format_terminal());
    }

    fn format_date(&self, format: &str) -> String {
        let mut formatted = String::new();
        if write!(formatted, "{}", self.date.format(format)).is_err() {
            debug!(format, "unusable date format, falling back to ISO");
            return self.date.format("%Y-%m-%d").to_string();
        }
        formatted
    }
}
