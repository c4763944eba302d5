use chrono::NaiveDate;
use thiserror::Error;

/// Rejected weight or goal values.
///
/// These are raised at data-entry time; the daily status engine only ever
/// sees values that passed these checks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightError {
    #[error("weight must be greater than zero, got {0}")]
    NonPositiveWeight(f64),

    #[error("weight must be a finite number")]
    NonFiniteWeight,

    #[error("goal date {goal_date} is before start date {start_date}")]
    GoalEndsBeforeStart {
        start_date: NaiveDate,
        goal_date: NaiveDate,
    },
}

pub(crate) fn validate_weight(value: f64) -> Result<f64, WeightError> {
    if !value.is_finite() {
        return Err(WeightError::NonFiniteWeight);
    }
    if value <= 0.0 {
        return Err(WeightError::NonPositiveWeight(value));
    }
    Ok(value)
}
