//! The fixed sample day printed by the binary

use crate::models::{Expense, ExpenseKind, Money};

/// Six sample expenses: five meals followed by one car rental
pub fn sample_expenses() -> Vec<Expense> {
    vec![
        Expense::meal(ExpenseKind::Breakfast, Money::from_cents(1520)),
        Expense::meal(ExpenseKind::Breakfast, Money::from_cents(2810)),
        Expense::meal(ExpenseKind::Lunch, Money::from_cents(1020)),
        Expense::meal(ExpenseKind::Dinner, Money::from_cents(1600)),
        Expense::meal(ExpenseKind::Dinner, Money::from_cents(12020)),
        Expense::car_rental(Money::from_cents(25000)),
    ]
}
