use anyhow::Result;

use crate::daily::{DailyDisplayInfo, StatusColor};

/// Presentation surface for the daily screen.
///
/// Implemented by whatever hosts the UI; the use cases only push values
/// into it.
#[async_trait::async_trait]
pub trait DailyInfoViewPort: Send + Sync {
    /// Bind the computed texts and button visibility.
    async fn render(&self, info: &DailyDisplayInfo) -> Result<()>;

    /// Tint the app chrome with the status color.
    async fn apply_color(&self, color: StatusColor) -> Result<()>;

    /// Open the first-run welcome flow.
    async fn launch_welcome_flow(&self) -> Result<()>;
}
