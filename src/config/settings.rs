//! User settings for the expense report
//!
//! Manages display preferences. Spending limits are fixed per expense kind
//! and deliberately absent here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;
use tracing::debug;

use crate::error::ExpenseError;
use crate::models::CURRENCY_SUFFIX;

/// Display settings for reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Suffix appended to every amount
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,

    /// Report date format (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Group lines by category in the text report
    #[serde(default)]
    pub show_by_category: bool,
}

fn default_currency_suffix() -> String {
    CURRENCY_SUFFIX.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_suffix: default_currency_suffix(),
            date_format: default_date_format(),
            show_by_category: false,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or return defaults when no path is given
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ExpenseError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Err(ExpenseError::Config(format!(
                "Settings file not found: {}",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            ExpenseError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;

        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Check that `date_format` can render a calendar date
    pub fn validate(&self) -> Result<(), ExpenseError> {
        let sample_date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
        let mut rendered = String::new();
        write!(rendered, "{}", sample_date.format(&self.date_format)).map_err(|_| {
            ExpenseError::Config(format!(
                "Invalid date_format '{}': only date fields are allowed",
                self.date_format
            ))
        })
    }

    /// Save settings to disk
    pub fn save(&self, path: &Path) -> Result<(), ExpenseError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
