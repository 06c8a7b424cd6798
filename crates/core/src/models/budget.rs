use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::DashboardError;

/// Planned vs. actual investment spending for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub name: String,
    pub allocated: f64,
    pub spent: f64,
}

impl BudgetCategory {
    pub fn new(name: impl Into<String>, allocated: f64, spent: f64) -> Self {
        Self {
            name: name.into(),
            allocated,
            spent,
        }
    }

    pub fn percent_spent(&self) -> f64 {
        if self.allocated > 0.0 {
            (self.spent / self.allocated) * 100.0
        } else {
            0.0
        }
    }

    pub fn remaining(&self) -> f64 {
        self.allocated - self.spent
    }
}

/// Monthly budget status card with month navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetTracker {
    /// Always the first day of the displayed month
    month: NaiveDate,
    pub total_budget: f64,
    pub spent: f64,
}

impl BudgetTracker {
    pub fn new(month: NaiveDate, total_budget: f64, spent: f64) -> Result<Self, DashboardError> {
        if total_budget < 0.0 || spent < 0.0 {
            return Err(DashboardError::ValidationError(
                "Budget and spent amounts must not be negative".into(),
            ));
        }
        Ok(Self {
            month: first_of_month(month),
            total_budget,
            spent,
        })
    }

    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn percent_used(&self) -> f64 {
        if self.total_budget > 0.0 {
            (self.spent / self.total_budget) * 100.0
        } else {
            0.0
        }
    }

    pub fn remaining(&self) -> f64 {
        self.total_budget - self.spent
    }

    /// Holds for a zero budget with any spending too.
    pub fn is_over_budget(&self) -> bool {
        self.spent > self.total_budget
    }

    pub fn previous_month(&mut self) {
        if let Some(prev) = self.month.checked_sub_months(Months::new(1)) {
            self.month = prev;
        }
    }

    pub fn next_month(&mut self) {
        if let Some(next) = self.month.checked_add_months(Months::new(1)) {
            self.month = next;
        }
    }

    /// Jump to the month containing `date` (calendar picker).
    pub fn select_month(&mut self, date: NaiveDate) {
        self.month = first_of_month(date);
    }

    /// Header label, e.g. "April 2023".
    pub fn month_label(&self) -> String {
        self.month.format("%B %Y").to_string()
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
