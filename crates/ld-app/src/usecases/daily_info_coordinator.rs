use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use ld_core::ports::{DailyInfoViewPort, DataProviderPort};
use ld_core::DailyDisplayInfo;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info_span, Instrument};

use super::{GetDailyDisplayInfo, ShowWelcomeFlowIfNeeded};

/// Result of a single refresh pass.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// The welcome flow was opened instead of updating the daily screen.
    WelcomeFlowLaunched,
    /// Fresh daily info was rendered.
    Rendered(DailyDisplayInfo),
    /// Something failed; the view keeps whatever it showed before.
    Failed,
}

/// Keeps the daily screen in step with stored user data.
///
/// The first refresh of a session checks the welcome flow before anything
/// else. After that every refresh recomputes the daily info and pushes it
/// to the view. Failures are logged and leave the view untouched.
pub struct DailyInfoCoordinator {
    daily_info: Arc<GetDailyDisplayInfo>,
    welcome: Arc<ShowWelcomeFlowIfNeeded>,
    data: Arc<dyn DataProviderPort>,
    view: Arc<dyn DailyInfoViewPort>,
    is_first_startup: AtomicBool,
}

/// Helper for constructing the coordinator with explicit dependency fields.
pub struct DailyInfoCoordinatorDeps {
    pub daily_info: Arc<GetDailyDisplayInfo>,
    pub welcome: Arc<ShowWelcomeFlowIfNeeded>,
    pub data: Arc<dyn DataProviderPort>,
    pub view: Arc<dyn DailyInfoViewPort>,
}

impl DailyInfoCoordinator {
    pub fn new(
        daily_info: Arc<GetDailyDisplayInfo>,
        welcome: Arc<ShowWelcomeFlowIfNeeded>,
        data: Arc<dyn DataProviderPort>,
        view: Arc<dyn DailyInfoViewPort>,
    ) -> Self {
        Self {
            daily_info,
            welcome,
            data,
            view,
            is_first_startup: AtomicBool::new(true),
        }
    }

    /// Construct a coordinator from dependency bundle.
    pub fn from_deps(deps: DailyInfoCoordinatorDeps) -> Self {
        let DailyInfoCoordinatorDeps {
            daily_info,
            welcome,
            data,
            view,
        } = deps;

        Self::new(daily_info, welcome, data, view)
    }

    /// Run one refresh pass. Never fails; see [`RefreshOutcome`].
    pub async fn refresh(&self) -> RefreshOutcome {
        let span = info_span!("coordinator.daily_info.refresh");

        async {
            if self.is_first_startup.swap(false, Ordering::SeqCst) {
                match self.launch_welcome_if_needed().await {
                    Ok(true) => return RefreshOutcome::WelcomeFlowLaunched,
                    Ok(false) => {}
                    Err(err) => {
                        error!(error = %format!("{err:#}"), "Welcome flow check failed");
                    }
                }
            }

            match self.render_today().await {
                Ok(info) => RefreshOutcome::Rendered(info),
                Err(err) => {
                    error!(
                        error = %format!("{err:#}"),
                        "Daily info refresh failed; keeping previous display"
                    );
                    RefreshOutcome::Failed
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Start following user data changes.
    ///
    /// Subscribes first, then refreshes right away if the data provider has
    /// already loaded; otherwise its `Initialized` event triggers the first
    /// refresh. The returned handle stops listening when dropped.
    pub async fn activate(self: &Arc<Self>) -> Result<DailyInfoActivation> {
        let mut updates = self.data.subscribe_updates().await?;
        let (refreshed_tx, refreshed) = watch::channel(0usize);

        if self.data.has_been_initialized() {
            self.refresh().await;
            refreshed_tx.send_modify(|count| *count += 1);
        }

        let coordinator = Arc::clone(self);
        let handle = tokio::spawn(async move {
            while let Some(event) = updates.recv().await {
                debug!(?event, "User data changed");
                coordinator.refresh().await;
                refreshed_tx.send_modify(|count| *count += 1);
            }
            debug!("User data event stream closed");
        });

        Ok(DailyInfoActivation { handle, refreshed })
    }

    async fn launch_welcome_if_needed(&self) -> Result<bool> {
        if !self.welcome.execute().await? {
            return Ok(false);
        }
        self.view.launch_welcome_flow().await?;
        Ok(true)
    }

    async fn render_today(&self) -> Result<DailyDisplayInfo> {
        let info = self.daily_info.execute().await?;
        self.view.render(&info).await?;
        self.view.apply_color(info.color_to_show).await?;
        Ok(info)
    }
}

/// Live subscription created by [`DailyInfoCoordinator::activate`].
pub struct DailyInfoActivation {
    handle: JoinHandle<()>,
    refreshed: watch::Receiver<usize>,
}

impl DailyInfoActivation {
    /// Stop following user data changes.
    pub fn deactivate(self) {
        self.handle.abort();
    }

    pub fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Refresh passes completed since activation.
    pub fn refresh_count(&self) -> usize {
        *self.refreshed.borrow()
    }

    /// Wait until at least `count` refresh passes have completed.
    ///
    /// Fails if the listener stops first.
    pub async fn wait_for_refreshes(&mut self, count: usize) -> Result<()> {
        while *self.refreshed.borrow_and_update() < count {
            self.refreshed
                .changed()
                .await
                .context("daily info listener stopped")?;
        }
        Ok(())
    }
}

impl Drop for DailyInfoActivation {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
