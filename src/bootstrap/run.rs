use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use ld_app::usecases::{DailyInfoActivation, GoalDraft};
use ld_core::ports::DailyInfoViewPort;
use tracing::{info, info_span, Instrument};

use super::config::{load_config_or_default, resolve_config_path, resolve_data_dir};
use super::tracing::init_tracing_subscriber;
use super::wiring::wire_dependencies;
use crate::cli::{unit, Cli, Command};
use crate::view::ConsoleView;

/// Upper bound for the coordinator to finish a refresh pass.
const REFRESH_TIMEOUT: Duration = Duration::from_secs(5);

/// Load config, start logging, wire everything and run one command.
pub async fn run_app(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.clone().or_else(resolve_config_path);
    let config = load_config_or_default(config_path)?;
    let data_dir = resolve_data_dir(&config)?;

    let logs_dir = data_dir.join("logs");
    init_tracing_subscriber(config.file_logging.then_some(logs_dir.as_path()))?;

    let view: Arc<dyn DailyInfoViewPort> = Arc::new(ConsoleView::stdout());
    run_once(&config, data_dir, view, &cli.command()).await
}

/// Render today once the data is loaded, then apply `command` and render
/// again from the resulting `Updated` event.
pub(crate) async fn run_once(
    config: &ld_core::AppConfig,
    data_dir: PathBuf,
    view: Arc<dyn DailyInfoViewPort>,
    command: &Command,
) -> anyhow::Result<()> {
    let span = info_span!("app.run_once", data_dir = %data_dir.display());

    async {
        let deps = wire_dependencies(config, &data_dir, view);

        // Subscribe before loading so `Initialized` drives the first render.
        let mut activation = deps.coordinator.activate().await?;
        deps.store.initialize().await.context("Failed to load user data")?;
        wait_for_refreshes(&mut activation, 1).await?;

        match command {
            Command::Show => {}
            Command::Log { weight, kg, date } => {
                let date = date.unwrap_or_else(|| deps.clock.today());
                let entry = deps
                    .record_weight_entry
                    .execute(date, *weight, unit(*kg))
                    .await?;
                info!(date = %entry.date(), "Logged weight from command line");
                wait_for_refreshes(&mut activation, 2).await?;
            }
            Command::Goal {
                start_date,
                start_weight,
                goal_date,
                goal_weight,
                kg,
            } => {
                let draft = GoalDraft {
                    start_date: *start_date,
                    start_weight: *start_weight,
                    goal_date: *goal_date,
                    goal_weight: *goal_weight,
                    unit: unit(*kg),
                };
                deps.set_goal.execute(&draft).await?;
                info!("Goal set from command line");
                wait_for_refreshes(&mut activation, 2).await?;
            }
        }

        activation.deactivate();
        Ok(())
    }
    .instrument(span)
    .await
}

async fn wait_for_refreshes(
    activation: &mut DailyInfoActivation,
    count: usize,
) -> anyhow::Result<()> {
    tokio::time::timeout(REFRESH_TIMEOUT, activation.wait_for_refreshes(count))
        .await
        .context("Timed out waiting for the daily view to refresh")?
}
