pub mod daily_info_coordinator;
pub mod get_daily_display_info;
pub mod record_weight_entry;
pub mod set_goal;
pub mod show_welcome_flow;

pub use daily_info_coordinator::{
    DailyInfoActivation, DailyInfoCoordinator, DailyInfoCoordinatorDeps, RefreshOutcome,
};
pub use get_daily_display_info::GetDailyDisplayInfo;
pub use record_weight_entry::RecordWeightEntry;
pub use set_goal::{GoalDraft, SetGoal};
pub use show_welcome_flow::ShowWelcomeFlowIfNeeded;

use ld_core::WeightError;

/// Failure while writing user data.
///
/// Validation failures are kept apart from storage failures so callers can
/// show the former to the user and report the latter.
#[derive(Debug, thiserror::Error)]
pub enum UserDataError {
    #[error("invalid input: {0}")]
    Invalid(#[from] WeightError),

    #[error("failed to store user data")]
    Storage(#[source] anyhow::Error),
}
