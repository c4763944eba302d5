use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{validate_weight, WeightError};
use super::unit::WeightUnit;

/// Which way the goal asks the weight to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalDirection {
    Lose,
    Gain,
    Maintain,
}

/// A straight line from `(start_date, start_weight)` to `(goal_date, goal_weight)`.
///
/// Both weights are expressed in `unit`. `goal_date` is never earlier than
/// `start_date`; equal dates describe a same-day (maintenance) target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GoalRecord")]
pub struct WeightLossGoal {
    start_date: NaiveDate,
    start_weight: f64,
    goal_date: NaiveDate,
    goal_weight: f64,
    unit: WeightUnit,
}

impl WeightLossGoal {
    pub fn new(
        start_date: NaiveDate,
        start_weight: f64,
        goal_date: NaiveDate,
        goal_weight: f64,
        unit: WeightUnit,
    ) -> Result<Self, WeightError> {
        if goal_date < start_date {
            return Err(WeightError::GoalEndsBeforeStart {
                start_date,
                goal_date,
            });
        }

        Ok(Self {
            start_date,
            start_weight: validate_weight(start_weight)?,
            goal_date,
            goal_weight: validate_weight(goal_weight)?,
            unit,
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn start_weight(&self) -> f64 {
        self.start_weight
    }

    pub fn goal_date(&self) -> NaiveDate {
        self.goal_date
    }

    pub fn goal_weight(&self) -> f64 {
        self.goal_weight
    }

    pub fn unit(&self) -> WeightUnit {
        self.unit
    }

    pub fn direction(&self) -> GoalDirection {
        let delta = self.goal_weight - self.start_weight;
        if delta < 0.0 {
            GoalDirection::Lose
        } else if delta > 0.0 {
            GoalDirection::Gain
        } else {
            GoalDirection::Maintain
        }
    }

    /// Total distance the goal covers, `|goal_weight - start_weight|`.
    pub fn distance(&self) -> f64 {
        (self.goal_weight - self.start_weight).abs()
    }

    /// Length of the goal window in days.
    pub fn window_days(&self) -> i64 {
        (self.goal_date - self.start_date).num_days()
    }

    /// Where the line says the weight should be on `date`, in goal units.
    ///
    /// Dates up to `start_date` clamp to `start_weight`, dates from
    /// `goal_date` on clamp to `goal_weight`. A zero-length window yields
    /// `goal_weight` for every date.
    pub fn expected_weight_on(&self, date: NaiveDate) -> f64 {
        let total_days = self.window_days();
        if total_days <= 0 || date >= self.goal_date {
            return self.goal_weight;
        }
        if date <= self.start_date {
            return self.start_weight;
        }

        let elapsed_days = (date - self.start_date).num_days();
        let fraction = elapsed_days as f64 / total_days as f64;
        self.start_weight + (self.goal_weight - self.start_weight) * fraction
    }
}

#[derive(Deserialize)]
struct GoalRecord {
    start_date: NaiveDate,
    start_weight: f64,
    goal_date: NaiveDate,
    goal_weight: f64,
    #[serde(default)]
    unit: WeightUnit,
}

impl TryFrom<GoalRecord> for WeightLossGoal {
    type Error = WeightError;

    fn try_from(record: GoalRecord) -> Result<Self, Self::Error> {
        WeightLossGoal::new(
            record.start_date,
            record.start_weight,
            record.goal_date,
            record.goal_weight,
            record.unit,
        )
    }
}
