//! Date source for reports
//!
//! Reports read "today" exactly once, at construction. The [`Clock`] trait
//! lets callers substitute a fixed date for deterministic output.

use chrono::{NaiveDate, Utc};

/// Something that knows what day it is
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The system clock, reporting the current UTC date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock pinned to a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
