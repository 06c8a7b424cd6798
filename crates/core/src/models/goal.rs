use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Progress above which the tracker congratulates instead of counting down.
const NEAR_COMPLETE_PCT: f64 = 80.0;

const DAYS_PER_YEAR: i64 = 365;
const DAYS_PER_MONTH: i64 = 30;

/// An investment milestone with a target amount and deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: u32,
    pub name: String,
    pub target: f64,
    pub current: f64,
    pub target_date: NaiveDate,
}

/// Coarse distance to a goal deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub years: i64,
    pub months: i64,
}

impl std::fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plural = |n: i64| if n == 1 { "" } else { "s" };
        if self.years > 0 {
            write!(
                f,
                "{} year{} {} month{}",
                self.years,
                plural(self.years),
                self.months,
                plural(self.months)
            )
        } else {
            write!(f, "{} month{}", self.months, plural(self.months))
        }
    }
}

impl Goal {
    /// Share of the target reached, in percent. Zero for a non-positive target.
    pub fn progress_percent(&self) -> f64 {
        if self.target > 0.0 {
            (self.current / self.target) * 100.0
        } else {
            0.0
        }
    }

    pub fn amount_left(&self) -> f64 {
        (self.target - self.current).max(0.0)
    }

    /// Distance between `today` and the deadline, in 365-day years and 30-day
    /// months. Past deadlines count the same way (absolute distance).
    pub fn time_remaining(&self, today: NaiveDate) -> TimeRemaining {
        let days = (self.target_date - today).num_days().abs();
        TimeRemaining {
            years: days / DAYS_PER_YEAR,
            months: (days % DAYS_PER_YEAR) / DAYS_PER_MONTH,
        }
    }

    /// The line under the progress bar.
    pub fn status_line(&self, today: NaiveDate) -> String {
        let progress = self.progress_percent();
        if progress >= NEAR_COMPLETE_PCT {
            format!("You're {progress:.0}% there!")
        } else {
            format!("{} remaining", self.time_remaining(today))
        }
    }
}

/// One month of the goal progress chart. `value` is `None` for future months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgressPoint {
    pub month: String,
    pub value: Option<f64>,
}
