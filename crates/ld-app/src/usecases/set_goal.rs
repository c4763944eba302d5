use std::sync::Arc;

use chrono::NaiveDate;
use ld_core::ports::UserDataWriterPort;
use ld_core::{WeightError, WeightLossGoal, WeightUnit};
use serde::Deserialize;
use tracing::{info, info_span, Instrument};

use super::UserDataError;

/// Goal as entered by the user, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GoalDraft {
    pub start_date: NaiveDate,
    pub start_weight: f64,
    pub goal_date: NaiveDate,
    pub goal_weight: f64,
    #[serde(default)]
    pub unit: WeightUnit,
}

impl GoalDraft {
    pub fn validate(&self) -> Result<WeightLossGoal, WeightError> {
        WeightLossGoal::new(
            self.start_date,
            self.start_weight,
            self.goal_date,
            self.goal_weight,
            self.unit,
        )
    }
}

/// Use case for setting (or replacing) the weight goal.
pub struct SetGoal {
    writer: Arc<dyn UserDataWriterPort>,
}

impl SetGoal {
    pub fn new(writer: Arc<dyn UserDataWriterPort>) -> Self {
        Self { writer }
    }

    pub async fn execute(&self, draft: &GoalDraft) -> Result<WeightLossGoal, UserDataError> {
        let span = info_span!(
            "usecase.set_goal.execute",
            start_date = %draft.start_date,
            goal_date = %draft.goal_date
        );

        async {
            let goal = draft.validate()?;

            self.writer
                .set_goal(&goal)
                .await
                .map_err(UserDataError::Storage)?;

            info!(
                direction = ?goal.direction(),
                window_days = goal.window_days(),
                "Goal set"
            );
            Ok(goal)
        }
        .instrument(span)
        .await
    }
}
