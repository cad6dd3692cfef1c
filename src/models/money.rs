//! Money type for representing euro amounts
//!
//! Internally stores amounts in cents (i64) so that totals are exact and
//! two-decimal formatting never depends on floating-point rounding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Suffix appended to every rendered amount
pub const CURRENCY_SUFFIX: &str = "eur";

/// Represents a monetary amount stored as cents (hundredths of a euro)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use travel_expenses::models::Money;
    /// let amount = Money::from_cents(1520); // 15.20eur
    /// assert_eq!(amount.to_string(), "15.20eur");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole euros portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Format with exactly two decimals followed by `suffix`
    pub fn format_with_suffix(&self, suffix: &str) -> String {
        if self.is_negative() {
            format!("-{}.{:02}{}", self.units().abs(), self.cents_part(), suffix)
        } else {
            format!("{}.{:02}{}", self.units(), self.cents_part(), suffix)
        }
    }

    /// Format with exactly two decimals and no suffix
    pub fn format_plain(&self) -> String {
        self.format_with_suffix("")
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_suffix(CURRENCY_SUFFIX))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(12020);
        assert_eq!(m.cents(), 12020);
        assert_eq!(m.units(), 120);
        assert_eq!(m.cents_part(), 20);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1520).to_string(), "15.20eur");
        assert_eq!(Money::zero().to_string(), "0.00eur");
        assert_eq!(Money::from_cents(25000).to_string(), "250.00eur");
        assert_eq!(Money::from_cents(5).to_string(), "0.05eur");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50eur");
    }

    #[test]
    fn test_format_with_suffix() {
        assert_eq!(Money::from_cents(1600).format_with_suffix(" EUR"), "16.00 EUR");
        assert_eq!(Money::from_cents(1600).format_plain(), "16.00");
        assert_eq!(Money::from_cents(-5).format_plain(), "-0.05");
    }

    #[test]
    fn test_sum() {
        let amounts = [
            Money::from_cents(1000),
            Money::from_cents(500),
            Money::from_cents(1),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 1501);
        assert_eq!(amounts.into_iter().sum::<Money>(), total);

        let empty: Vec<Money> = Vec::new();
        assert!(empty.into_iter().sum::<Money>().is_zero());
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");
        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
