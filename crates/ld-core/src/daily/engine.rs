use chrono::NaiveDate;

use super::display::{DailyDisplayInfo, DailyStatus, GuidanceTier, StatusColor};
use super::messages;
use super::policy::DailyStatusPolicy;
use crate::weight::{GoalDirection, WeightEntry, WeightLossGoal};

/// Compute today's display state with the default [`DailyStatusPolicy`].
///
/// Pure and total: every combination of present/absent inputs yields a
/// defined result.
pub fn compute_daily_status(
    goal: Option<&WeightLossGoal>,
    todays_entry: Option<&WeightEntry>,
    today: NaiveDate,
) -> DailyDisplayInfo {
    compute_daily_status_with_policy(goal, todays_entry, today, &DailyStatusPolicy::default())
}

/// Compute today's display state using explicit thresholds.
pub fn compute_daily_status_with_policy(
    goal: Option<&WeightLossGoal>,
    todays_entry: Option<&WeightEntry>,
    today: NaiveDate,
    policy: &DailyStatusPolicy,
) -> DailyDisplayInfo {
    let Some(goal) = goal else {
        return no_goal(todays_entry);
    };

    let expected = goal.expected_weight_on(today);
    match todays_entry {
        None => awaiting_entry(expected),
        Some(entry) => evaluate_entry(goal, entry, today, expected, policy),
    }
}

fn no_goal(todays_entry: Option<&WeightEntry>) -> DailyDisplayInfo {
    DailyDisplayInfo {
        todays_display_weight: todays_entry
            .map(WeightEntry::display_weight)
            .unwrap_or_else(|| messages::UNKNOWN_WEIGHT.to_string()),
        todays_message: messages::SET_A_GOAL.to_string(),
        how_to_eat_message: String::new(),
        is_enter_weight_button_visible: true,
        is_set_goal_button_visible: true,
        color_to_show: StatusColor::Neutral,
        status: DailyStatus::NoGoal,
        expected_weight: None,
        guidance_tier: None,
    }
}

fn awaiting_entry(expected: f64) -> DailyDisplayInfo {
    DailyDisplayInfo {
        todays_display_weight: messages::UNKNOWN_WEIGHT.to_string(),
        todays_message: messages::LOG_TODAYS_WEIGHT.to_string(),
        how_to_eat_message: messages::HOW_TO_EAT_GENERIC.to_string(),
        is_enter_weight_button_visible: true,
        is_set_goal_button_visible: false,
        color_to_show: StatusColor::Neutral,
        status: DailyStatus::AwaitingEntry,
        expected_weight: Some(expected),
        guidance_tier: None,
    }
}

fn evaluate_entry(
    goal: &WeightLossGoal,
    entry: &WeightEntry,
    today: NaiveDate,
    expected: f64,
    policy: &DailyStatusPolicy,
) -> DailyDisplayInfo {
    let unit = goal.unit();
    let actual = entry.weight_in(unit);
    let direction = goal.direction();

    let mut info = DailyDisplayInfo {
        todays_display_weight: entry.display_weight(),
        todays_message: String::new(),
        how_to_eat_message: String::new(),
        is_enter_weight_button_visible: false,
        is_set_goal_button_visible: false,
        color_to_show: StatusColor::Neutral,
        status: DailyStatus::OnTrack,
        expected_weight: Some(expected),
        guidance_tier: None,
    };

    if today >= goal.goal_date() && target_met(goal, actual, policy) {
        info.status = DailyStatus::GoalReached;
        info.color_to_show = StatusColor::GoalReached;
        info.todays_message = messages::goal_reached(goal.goal_weight(), unit);
        info.how_to_eat_message = messages::HOW_TO_EAT_MAINTAIN.to_string();
        return info;
    }

    let shortfall = match direction {
        GoalDirection::Lose => actual - expected,
        GoalDirection::Gain => expected - actual,
        GoalDirection::Maintain => (actual - expected).abs() - policy.maintenance_band(goal),
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(actual, expected, shortfall, ?direction, "evaluated daily entry");

    if shortfall <= 0.0 {
        let margin = match direction {
            GoalDirection::Maintain => 0.0,
            _ => -shortfall,
        };
        info.status = DailyStatus::OnTrack;
        info.color_to_show = StatusColor::OnTrack;
        info.todays_message = messages::on_track(margin, unit);
        info.how_to_eat_message = messages::HOW_TO_EAT_ON_TRACK.to_string();
        info.guidance_tier = Some(GuidanceTier::OnTrack);
        return info;
    }

    let tier = if shortfall <= policy.significant_threshold(goal) {
        GuidanceTier::ModeratelyOff
    } else {
        GuidanceTier::SignificantlyOff
    };

    info.status = DailyStatus::OffTrack;
    info.color_to_show = StatusColor::OffTrack;
    info.todays_message = messages::off_track(shortfall, unit);
    info.how_to_eat_message = match tier {
        GuidanceTier::ModeratelyOff => messages::HOW_TO_EAT_MODERATELY_OFF,
        _ => messages::HOW_TO_EAT_SIGNIFICANTLY_OFF,
    }
    .to_string();
    info.guidance_tier = Some(tier);
    info
}

fn target_met(goal: &WeightLossGoal, actual: f64, policy: &DailyStatusPolicy) -> bool {
    match goal.direction() {
        GoalDirection::Lose => actual <= goal.goal_weight(),
        GoalDirection::Gain => actual >= goal.goal_weight(),
        GoalDirection::Maintain => {
            (actual - goal.goal_weight()).abs() <= policy.maintenance_band(goal)
        }
    }
}
