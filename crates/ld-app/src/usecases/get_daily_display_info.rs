//! Use case for computing today's daily screen state

use std::sync::Arc;

use anyhow::{Context, Result};
use ld_core::ports::{ClockPort, DataProviderPort};
use ld_core::{compute_daily_status_with_policy, DailyDisplayInfo, DailyStatusPolicy};
use tracing::{debug, info_span, Instrument};

/// Use case for computing today's [`DailyDisplayInfo`].
///
/// Both reads complete before the engine runs, so the engine never sees
/// partially loaded data.
pub struct GetDailyDisplayInfo {
    data: Arc<dyn DataProviderPort>,
    clock: Arc<dyn ClockPort>,
    policy: DailyStatusPolicy,
}

impl GetDailyDisplayInfo {
    pub fn new(
        data: Arc<dyn DataProviderPort>,
        clock: Arc<dyn ClockPort>,
        policy: DailyStatusPolicy,
    ) -> Self {
        Self {
            data,
            clock,
            policy,
        }
    }

    pub async fn execute(&self) -> Result<DailyDisplayInfo> {
        let today = self.clock.today();
        let span = info_span!("usecase.get_daily_display_info.execute", %today);

        async {
            let todays_entry = self
                .data
                .get_weight_entry_for_date(today)
                .await
                .context("load today's weight entry")?;
            let goal = self.data.get_goal().await.context("load goal")?;

            let info = compute_daily_status_with_policy(
                goal.as_ref(),
                todays_entry.as_ref(),
                today,
                &self.policy,
            );

            debug!(
                status = ?info.status,
                color = ?info.color_to_show,
                has_goal = goal.is_some(),
                has_entry = todays_entry.is_some(),
                "Computed daily display info"
            );
            Ok(info)
        }
        .instrument(span)
        .await
    }
}
