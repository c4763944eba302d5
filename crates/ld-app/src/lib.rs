//! LineDiet Application Orchestration Layer
//!
//! This crate contains the use cases that sit between the ports and the pure
//! daily status engine, plus the coordinator that keeps the daily screen in
//! sync with stored data.

pub mod usecases;

pub use usecases::{
    DailyInfoActivation, DailyInfoCoordinator, DailyInfoCoordinatorDeps, GetDailyDisplayInfo,
    GoalDraft, RecordWeightEntry, RefreshOutcome, SetGoal, ShowWelcomeFlowIfNeeded, UserDataError,
};
