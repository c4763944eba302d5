//! # Pure Data Module - Data Transfer Objects Only
//!
//! Defines configuration data structures and the TOML → DTO mapping.
//! No validation and no policy here: missing values map to empty facts.
//! Consumers decide what they mean; `DailyStatusPolicy::with_overrides`
//! drops threshold overrides that are negative or not finite.

mod app_config;

pub use app_config::{AppConfig, PolicyOverrides};
