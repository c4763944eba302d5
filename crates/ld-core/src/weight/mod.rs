//! Weight measurements and weight goals.
//!
//! Values in this module are validated on construction and on
//! deserialization, so downstream code never has to re-check them.

mod entry;
mod error;
mod goal;
mod unit;

pub use entry::WeightEntry;
pub use error::WeightError;
pub use goal::{GoalDirection, WeightLossGoal};
pub use unit::{WeightUnit, KILOGRAMS_PER_POUND};
