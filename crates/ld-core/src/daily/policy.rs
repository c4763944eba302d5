use crate::config::PolicyOverrides;
use crate::weight::{WeightLossGoal, WeightUnit};

/// Tunable constants behind the daily status decision.
///
/// Absolute amounts are stored in pounds and converted into the goal's unit
/// when applied.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyStatusPolicy {
    /// Share of the goal distance a shortfall may reach before guidance
    /// escalates from "moderately off" to "significantly off".
    pub significantly_off_fraction: f64,
    /// Lower bound for that escalation threshold, so short goals do not
    /// escalate on scale noise.
    pub significantly_off_floor_pounds: f64,
    /// Tolerance either side of the target for maintenance goals.
    pub maintenance_band_pounds: f64,
}

pub const DEFAULT_SIGNIFICANTLY_OFF_FRACTION: f64 = 0.10;
pub const DEFAULT_SIGNIFICANTLY_OFF_FLOOR_POUNDS: f64 = 1.0;
pub const DEFAULT_MAINTENANCE_BAND_POUNDS: f64 = 1.0;

impl Default for DailyStatusPolicy {
    fn default() -> Self {
        Self {
            significantly_off_fraction: DEFAULT_SIGNIFICANTLY_OFF_FRACTION,
            significantly_off_floor_pounds: DEFAULT_SIGNIFICANTLY_OFF_FLOOR_POUNDS,
            maintenance_band_pounds: DEFAULT_MAINTENANCE_BAND_POUNDS,
        }
    }
}

impl DailyStatusPolicy {
    /// Defaults with any values present in the config file applied on top.
    ///
    /// Overrides that are negative or not finite are ignored in favor of the
    /// default.
    pub fn with_overrides(overrides: &PolicyOverrides) -> Self {
        Self {
            significantly_off_fraction: accepted(
                "significantly_off_fraction",
                overrides.significantly_off_fraction,
                DEFAULT_SIGNIFICANTLY_OFF_FRACTION,
            ),
            significantly_off_floor_pounds: accepted(
                "significantly_off_floor_pounds",
                overrides.significantly_off_floor_pounds,
                DEFAULT_SIGNIFICANTLY_OFF_FLOOR_POUNDS,
            ),
            maintenance_band_pounds: accepted(
                "maintenance_band_pounds",
                overrides.maintenance_band_pounds,
                DEFAULT_MAINTENANCE_BAND_POUNDS,
            ),
        }
    }

    /// Shortfall (in goal units) above which guidance is "significantly off".
    pub fn significant_threshold(&self, goal: &WeightLossGoal) -> f64 {
        let floor = WeightUnit::Pounds.convert(self.significantly_off_floor_pounds, goal.unit());
        (goal.distance() * self.significantly_off_fraction).max(floor)
    }

    /// Maintenance tolerance in goal units.
    pub fn maintenance_band(&self, goal: &WeightLossGoal) -> f64 {
        WeightUnit::Pounds.convert(self.maintenance_band_pounds, goal.unit())
    }
}

fn accepted(name: &'static str, value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        Some(v) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(setting = name, value = v, default, "Ignoring invalid policy override");
            #[cfg(not(feature = "tracing"))]
            let _ = (name, v);
            default
        }
        None => default,
    }
}
