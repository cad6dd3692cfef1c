//! Expense entries and their classification
//!
//! An expense carries two independent labels: its [`ExpenseKind`], which
//! drives the spending limit and the printed label, and its [`ExpenseGroup`],
//! which drives aggregation in the report.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::{Money, CURRENCY_SUFFIX};
use crate::error::{ExpenseError, ExpenseResult};

/// Annotation appended to a line when an expense exceeds its limit
pub const OVER_LIMIT_MARKER: &str = "[over-expense!]";

/// The specific kind of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseKind {
    Breakfast,
    Lunch,
    Dinner,
    #[serde(rename = "Car Rental")]
    CarRental,
}

impl ExpenseKind {
    /// Spending limit for this kind, if it has one
    pub const fn limit(&self) -> Option<Money> {
        match self {
            Self::Breakfast => Some(Money::from_cents(2000)),
            Self::Lunch => Some(Money::from_cents(5000)),
            Self::Dinner => Some(Money::from_cents(10000)),
            Self::CarRental => None,
        }
    }

    /// Whether this kind may be booked as a meal
    pub const fn is_meal(&self) -> bool {
        matches!(self, Self::Breakfast | Self::Lunch | Self::Dinner)
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::CarRental => "Car Rental",
        }
    }
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The group label used to aggregate expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseGroup {
    Meal,
    #[serde(rename = "Car Rental")]
    CarRental,
}

impl ExpenseGroup {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Meal => "Meal",
            Self::CarRental => "Car Rental",
        }
    }
}

impl fmt::Display for ExpenseGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single spending entry
///
/// Expenses are immutable once built. Use [`Expense::meal`] or
/// [`Expense::car_rental`] to construct one; the validating variants
/// [`Expense::try_meal`] and [`Expense::try_car_rental`] reject entries the
/// plain constructors accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    kind: ExpenseKind,
    group: ExpenseGroup,
    amount: Money,
}

impl Expense {
    /// Create a meal expense
    ///
    /// The kind is not checked for meal membership.
    pub fn meal(kind: ExpenseKind, amount: Money) -> Self {
        Self {
            kind,
            group: ExpenseGroup::Meal,
            amount,
        }
    }

    /// Create a car rental expense
    pub fn car_rental(amount: Money) -> Self {
        Self {
            kind: ExpenseKind::CarRental,
            group: ExpenseGroup::CarRental,
            amount,
        }
    }

    /// Create a meal expense, rejecting non-meal kinds and negative amounts
    pub fn try_meal(kind: ExpenseKind, amount: Money) -> ExpenseResult<Self> {
        let expense = Self::meal(kind, amount);
        expense.validate()?;
        Ok(expense)
    }

    /// Create a car rental expense, rejecting negative amounts
    pub fn try_car_rental(amount: Money) -> ExpenseResult<Self> {
        let expense = Self::car_rental(amount);
        expense.validate()?;
        Ok(expense)
    }

    /// Validate the expense
    pub fn validate(&self) -> ExpenseResult<()> {
        if self.amount.is_negative() {
            return Err(ExpenseError::Validation(format!(
                "{} amount must not be negative: {}",
                self.kind, self.amount
            )));
        }

        if self.group == ExpenseGroup::Meal && !self.kind.is_meal() {
            return Err(ExpenseError::Validation(format!(
                "'{}' cannot be booked as a meal",
                self.kind
            )));
        }

        Ok(())
    }

    pub fn kind(&self) -> ExpenseKind {
        self.kind
    }

    pub fn group(&self) -> ExpenseGroup {
        self.group
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Check whether the amount is strictly above the kind's limit
    pub fn is_over_limit(&self) -> bool {
        self.kind
            .limit()
            .is_some_and(|limit| self.amount > limit)
    }

    /// Render the expense as a tab-separated report line
    pub fn describe(&self) -> String {
        self.describe_with_suffix(CURRENCY_SUFFIX)
    }

    /// Render the expense line using a custom currency suffix
    pub fn describe_with_suffix(&self, suffix: &str) -> String {
        let marker = if self.is_over_limit() {
            OVER_LIMIT_MARKER
        } else {
            ""
        };
        format!(
            "{}\t{}\t{}",
            self.kind,
            self.amount.format_with_suffix(suffix),
            marker
        )
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(kind: ExpenseKind, cents: i64) -> Expense {
        Expense::meal(kind, Money::from_cents(cents))
    }

    #[test]
    fn test_breakfast_limit_boundary() {
        assert!(!meal(ExpenseKind::Breakfast, 2000).is_over_limit());
        assert!(meal(ExpenseKind::Breakfast, 2001).is_over_limit());
        assert!(meal(ExpenseKind::Breakfast, 2810).is_over_limit());
    }

    #[test]
    fn test_lunch_limit_boundary() {
        assert!(!meal(ExpenseKind::Lunch, 5000).is_over_limit());
        assert!(meal(ExpenseKind::Lunch, 5001).is_over_limit());
    }

    #[test]
    fn test_dinner_limit_boundary() {
        assert!(!meal(ExpenseKind::Dinner, 10000).is_over_limit());
        assert!(meal(ExpenseKind::Dinner, 10001).is_over_limit());
    }

    #[test]
    fn test_car_rental_never_over_limit() {
        assert!(!Expense::car_rental(Money::from_cents(25000)).is_over_limit());
        assert!(!Expense::car_rental(Money::from_cents(i64::MAX)).is_over_limit());
        // Kind decides the limit, not the group
        assert!(!meal(ExpenseKind::CarRental, 1_000_000).is_over_limit());
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            meal(ExpenseKind::Dinner, 12020).describe(),
            "Dinner\t120.20eur\t[over-expense!]"
        );
        assert_eq!(meal(ExpenseKind::Dinner, 1600).describe(), "Dinner\t16.00eur\t");
        assert_eq!(
            Expense::car_rental(Money::from_cents(25000)).to_string(),
            "Car Rental\t250.00eur\t"
        );
    }

    #[test]
    fn test_describe_with_suffix() {
        assert_eq!(
            meal(ExpenseKind::Lunch, 1020).describe_with_suffix("EUR"),
            "Lunch\t10.20EUR\t"
        );
    }

    #[test]
    fn test_group_labels() {
        assert_eq!(meal(ExpenseKind::Lunch, 100).group(), ExpenseGroup::Meal);
        let rental = Expense::car_rental(Money::from_cents(100));
        assert_eq!(rental.group(), ExpenseGroup::CarRental);
        assert_eq!(rental.kind(), ExpenseKind::CarRental);
        assert_eq!(ExpenseGroup::CarRental.to_string(), "Car Rental");
    }

    #[test]
    fn test_try_meal_rejects_car_rental_kind() {
        let err = Expense::try_meal(ExpenseKind::CarRental, Money::from_cents(100)).unwrap_err();
        assert!(err.is_validation());
        assert!(Expense::try_meal(ExpenseKind::Lunch, Money::from_cents(100)).is_ok());
    }

    #[test]
    fn test_try_constructors_reject_negative_amounts() {
        assert!(Expense::try_meal(ExpenseKind::Lunch, Money::from_cents(-1)).is_err());
        assert!(Expense::try_car_rental(Money::from_cents(-1)).is_err());
        assert!(Expense::try_car_rental(Money::zero()).is_ok());
    }

    #[test]
    fn test_serialization_labels() {
        let json = serde_json::to_string(&Expense::car_rental(Money::from_cents(100))).unwrap();
        assert_eq!(json, r#"{"kind":"Car Rental","group":"Car Rental","amount":100}"#);
    }
}
