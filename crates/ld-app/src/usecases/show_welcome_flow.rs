use std::sync::Arc;

use anyhow::{Context, Result};
use ld_core::ports::{DataProviderPort, SettingsPort};
use ld_core::WelcomeGate;
use tracing::{info, info_span, Instrument};

/// Use case deciding whether the first-run welcome flow should open.
///
/// When the answer is yes, the dismissal is persisted before returning so
/// the flow is not offered again on the next start.
pub struct ShowWelcomeFlowIfNeeded {
    data: Arc<dyn DataProviderPort>,
    settings: Arc<dyn SettingsPort>,
    gate: WelcomeGate,
}

impl ShowWelcomeFlowIfNeeded {
    pub fn new(
        data: Arc<dyn DataProviderPort>,
        settings: Arc<dyn SettingsPort>,
        gate: WelcomeGate,
    ) -> Self {
        Self {
            data,
            settings,
            gate,
        }
    }

    /// Returns `true` when the caller should launch the welcome flow.
    pub async fn execute(&self) -> Result<bool> {
        let span = info_span!("usecase.show_welcome_flow.execute", force = self.gate.force_show);

        async {
            let goal = self.data.get_goal().await.context("load goal")?;
            let mut settings = self.settings.load().await.context("load settings")?;

            let show = self
                .gate
                .evaluate(goal.as_ref(), settings.has_dismissed_startup_view);
            if !show {
                return Ok(false);
            }

            if !settings.has_dismissed_startup_view {
                settings.has_dismissed_startup_view = true;
                self.settings
                    .save(&settings)
                    .await
                    .context("record welcome flow dismissal")?;
            }

            info!("Welcome flow needed");
            Ok(true)
        }
        .instrument(span)
        .await
    }
}
