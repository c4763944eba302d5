use anyhow::Result;
use async_trait::async_trait;

use crate::weight::{WeightEntry, WeightLossGoal};

/// Write side of the user's weight data.
#[async_trait]
pub trait UserDataWriterPort: Send + Sync {
    /// Store `entry`, replacing any entry already recorded for its date.
    async fn save_weight_entry(&self, entry: &WeightEntry) -> Result<()>;

    /// Replace the current goal.
    async fn set_goal(&self, goal: &WeightLossGoal) -> Result<()>;
}
