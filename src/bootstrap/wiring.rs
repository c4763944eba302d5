//! # Dependency Injection
//!
//! Creates the infra implementations, wraps them in the use cases and hands
//! back the assembled [`AppDeps`]. This is the only place that depends on
//! `ld-infra` and `ld-app` together; it assembles and makes no decisions.

use std::path::Path;
use std::sync::Arc;

use ld_app::usecases::{
    DailyInfoCoordinator, DailyInfoCoordinatorDeps, GetDailyDisplayInfo, RecordWeightEntry,
    SetGoal, ShowWelcomeFlowIfNeeded,
};
use ld_core::config::AppConfig;
use ld_core::ports::{ClockPort, DailyInfoViewPort, DataProviderPort, SettingsPort};
use ld_core::{DailyStatusPolicy, WelcomeGate};
use ld_infra::{FileSettingsRepository, FileUserDataStore, SystemClock};

/// Everything the host needs after wiring.
pub struct AppDeps {
    /// Concrete store, kept so the host can run the initial load.
    pub store: Arc<FileUserDataStore>,
    pub coordinator: Arc<DailyInfoCoordinator>,
    /// Clock shared with the daily status use case; dates omitted on the
    /// command line resolve against it.
    pub clock: Arc<dyn ClockPort>,
    pub record_weight_entry: RecordWeightEntry,
    pub set_goal: SetGoal,
}

/// Wire all dependencies rooted at `data_dir`.
pub fn wire_dependencies(
    config: &AppConfig,
    data_dir: &Path,
    view: Arc<dyn DailyInfoViewPort>,
) -> AppDeps {
    let store = Arc::new(FileUserDataStore::with_defaults(data_dir.to_path_buf()));
    let settings: Arc<dyn SettingsPort> =
        Arc::new(FileSettingsRepository::with_defaults(data_dir.to_path_buf()));
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
    let data: Arc<dyn DataProviderPort> = store.clone();

    let policy = DailyStatusPolicy::with_overrides(&config.policy);
    let gate = WelcomeGate::new(config.force_show_welcome);

    let daily_info = Arc::new(GetDailyDisplayInfo::new(data.clone(), clock.clone(), policy));
    let welcome = Arc::new(ShowWelcomeFlowIfNeeded::new(data.clone(), settings, gate));

    let coordinator = Arc::new(DailyInfoCoordinator::from_deps(DailyInfoCoordinatorDeps {
        daily_info,
        welcome,
        data,
        view,
    }));

    AppDeps {
        record_weight_entry: RecordWeightEntry::new(store.clone()),
        set_goal: SetGoal::new(store.clone()),
        store,
        coordinator,
        clock,
    }
}
