//! First-run welcome flow gate.

use crate::weight::WeightLossGoal;

/// Whether the welcome flow should be shown.
///
/// True only when there is no goal yet and the user has never dismissed the
/// startup flow. Recording that the flow was shown is the caller's job.
pub fn should_show_welcome_flow(
    existing_goal: Option<&WeightLossGoal>,
    has_dismissed_startup: bool,
) -> bool {
    existing_goal.is_none() && !has_dismissed_startup
}

/// Welcome gate with the debug override made explicit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WelcomeGate {
    /// Always show the welcome flow, regardless of goal or dismissal.
    pub force_show: bool,
}

impl WelcomeGate {
    pub fn new(force_show: bool) -> Self {
        Self { force_show }
    }

    pub fn evaluate(
        &self,
        existing_goal: Option<&WeightLossGoal>,
        has_dismissed_startup: bool,
    ) -> bool {
        self.force_show || should_show_welcome_flow(existing_goal, has_dismissed_startup)
    }
}
