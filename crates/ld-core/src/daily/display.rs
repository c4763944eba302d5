use serde::{Deserialize, Serialize};

use super::messages;

/// Color signal the host applies to the app chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusColor {
    #[default]
    Neutral,
    OnTrack,
    OffTrack,
    GoalReached,
}

/// Which branch of the daily decision produced a [`DailyDisplayInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyStatus {
    NoGoal,
    AwaitingEntry,
    OnTrack,
    OffTrack,
    GoalReached,
}

/// Eating guidance tier for an evaluated entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidanceTier {
    OnTrack,
    ModeratelyOff,
    SignificantlyOff,
}

/// Everything the daily screen needs, recomputed on every refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyDisplayInfo {
    pub todays_display_weight: String,
    pub todays_message: String,
    pub how_to_eat_message: String,
    pub is_enter_weight_button_visible: bool,
    pub is_set_goal_button_visible: bool,
    pub color_to_show: StatusColor,
    pub status: DailyStatus,
    /// Interpolated target for today in goal units, when a goal exists.
    pub expected_weight: Option<f64>,
    pub guidance_tier: Option<GuidanceTier>,
}

impl DailyDisplayInfo {
    /// Placeholder state a view shows before the first computation lands.
    pub fn loading() -> Self {
        Self {
            todays_display_weight: messages::UNKNOWN_WEIGHT.to_string(),
            todays_message: messages::LOADING.to_string(),
            how_to_eat_message: String::new(),
            is_enter_weight_button_visible: false,
            is_set_goal_button_visible: false,
            color_to_show: StatusColor::Neutral,
            status: DailyStatus::AwaitingEntry,
            expected_weight: None,
            guidance_tier: None,
        }
    }
}
