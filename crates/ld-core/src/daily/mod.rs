//! Daily status computation.
//!
//! Turns a goal and today's entry into the text, buttons and color the daily
//! screen shows. Nothing in here performs I/O or keeps state between calls.

mod display;
mod engine;
pub mod messages;
mod policy;

pub use display::{DailyDisplayInfo, DailyStatus, GuidanceTier, StatusColor};
pub use engine::{compute_daily_status, compute_daily_status_with_policy};
pub use policy::{
    DailyStatusPolicy, DEFAULT_MAINTENANCE_BAND_POUNDS, DEFAULT_SIGNIFICANTLY_OFF_FLOOR_POUNDS,
    DEFAULT_SIGNIFICANTLY_OFF_FRACTION,
};
