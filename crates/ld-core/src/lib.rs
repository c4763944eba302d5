//! # ld-core
//!
//! Core domain models and business logic for LineDiet.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies. The daily status engine ([`compute_daily_status`]) and the
//! welcome gate ([`should_show_welcome_flow`]) are plain functions of their
//! inputs and are safe to call from any thread.

pub mod config;
pub mod daily;
pub mod ports;
pub mod settings;
pub mod weight;
pub mod welcome;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use daily::{
    compute_daily_status, compute_daily_status_with_policy, DailyDisplayInfo, DailyStatus,
    DailyStatusPolicy, GuidanceTier, StatusColor,
};
pub use settings::Settings;
pub use weight::{GoalDirection, WeightEntry, WeightError, WeightLossGoal, WeightUnit};
pub use welcome::{should_show_welcome_flow, WelcomeGate};
