//! Data provider port - read side of the user's weight data

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::weight::{WeightEntry, WeightLossGoal};

/// Notification that stored user data changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserDataEvent {
    /// Initial load finished; data can now be read.
    Initialized,
    /// A goal or weight entry was written.
    Updated,
}

#[async_trait]
pub trait DataProviderPort: Send + Sync {
    /// Entry recorded for `date`, if any. At most one entry exists per date.
    async fn get_weight_entry_for_date(&self, date: NaiveDate) -> Result<Option<WeightEntry>>;

    /// The current goal, if one has been set.
    async fn get_goal(&self) -> Result<Option<WeightLossGoal>>;

    /// Whether the initial load has completed.
    fn has_been_initialized(&self) -> bool;

    /// Subscribe to data change notifications.
    ///
    /// Dropping the receiver unsubscribes.
    async fn subscribe_updates(&self) -> Result<tokio::sync::mpsc::Receiver<UserDataEvent>>;
}
