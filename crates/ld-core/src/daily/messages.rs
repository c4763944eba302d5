//! User-facing text for the daily screen.

use crate::weight::WeightUnit;

pub const LOADING: &str = "Loading...";
pub const UNKNOWN_WEIGHT: &str = "--";

pub const SET_A_GOAL: &str =
    "You haven't set a goal yet. Set one to see where your line says you should be each day.";

pub const LOG_TODAYS_WEIGHT: &str =
    "Step on the scale and log today's weight to see how you're doing against your line.";

pub const HOW_TO_EAT_GENERIC: &str =
    "Eat sensible portions today and stop when you're satisfied, not stuffed.";

pub const HOW_TO_EAT_ON_TRACK: &str =
    "Keep doing what you're doing. Eat normal, balanced meals today.";

pub const HOW_TO_EAT_MODERATELY_OFF: &str =
    "Eat a little lighter today: smaller portions, skip the snacks and seconds.";

pub const HOW_TO_EAT_SIGNIFICANTLY_OFF: &str =
    "Eat much lighter today: favor vegetables and lean protein and cut out sweets and extras.";

pub const HOW_TO_EAT_MAINTAIN: &str =
    "Eat normal, balanced meals and keep weighing in to hold your new weight.";

pub fn on_track(margin: f64, unit: WeightUnit) -> String {
    if margin < 0.05 {
        "You're right on your line today. Nice work!".to_string()
    } else {
        format!(
            "You're on track, {} ahead of your line today. Nice work!",
            unit.format(margin)
        )
    }
}

pub fn off_track(shortfall: f64, unit: WeightUnit) -> String {
    format!(
        "You're {} behind your line today. One day at a time, you can get back on it.",
        unit.format(shortfall)
    )
}

pub fn goal_reached(goal_weight: f64, unit: WeightUnit) -> String {
    format!(
        "You reached your goal of {}! Congratulations!",
        unit.format(goal_weight)
    )
}
