use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use tokio::sync::mpsc;

use ld_app::usecases::{
    DailyInfoCoordinator, DailyInfoCoordinatorDeps, GetDailyDisplayInfo, RefreshOutcome,
    ShowWelcomeFlowIfNeeded,
};
use ld_core::ports::{ClockPort, DailyInfoViewPort, DataProviderPort, SettingsPort, UserDataEvent};
use ld_core::{
    DailyDisplayInfo, DailyStatus, DailyStatusPolicy, Settings, StatusColor, WeightEntry,
    WeightLossGoal, WeightUnit, WelcomeGate,
};

mock! {
    pub Data {}

    #[async_trait]
    impl DataProviderPort for Data {
        async fn get_weight_entry_for_date(
            &self,
            date: NaiveDate,
        ) -> anyhow::Result<Option<WeightEntry>>;
        async fn get_goal(&self) -> anyhow::Result<Option<WeightLossGoal>>;
        fn has_been_initialized(&self) -> bool;
        async fn subscribe_updates(&self) -> anyhow::Result<mpsc::Receiver<UserDataEvent>>;
    }
}

mock! {
    pub Clock {}

    impl ClockPort for Clock {
        fn today(&self) -> NaiveDate;
    }
}

#[derive(Debug, Clone, PartialEq)]
enum ViewCall {
    Render(DailyStatus),
    Color(StatusColor),
    WelcomeFlow,
}

#[derive(Default)]
struct RecordingView {
    calls: Mutex<Vec<ViewCall>>,
}

impl RecordingView {
    fn calls(&self) -> Vec<ViewCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DailyInfoViewPort for RecordingView {
    async fn render(&self, info: &DailyDisplayInfo) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(ViewCall::Render(info.status));
        Ok(())
    }

    async fn apply_color(&self, color: StatusColor) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(ViewCall::Color(color));
        Ok(())
    }

    async fn launch_welcome_flow(&self) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(ViewCall::WelcomeFlow);
        Ok(())
    }
}

#[derive(Default)]
struct InMemorySettings {
    settings: Mutex<Settings>,
}

#[async_trait]
impl SettingsPort for InMemorySettings {
    async fn load(&self) -> anyhow::Result<Settings> {
        Ok(self.settings.lock().unwrap().clone())
    }

    async fn save(&self, settings: &Settings) -> anyhow::Result<()> {
        *self.settings.lock().unwrap() = settings.clone();
        Ok(())
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
}

fn winter_goal() -> WeightLossGoal {
    WeightLossGoal::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        200.0,
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        180.0,
        WeightUnit::Pounds,
    )
    .unwrap()
}

fn fixed_clock() -> MockClock {
    let mut clock = MockClock::new();
    clock.expect_today().returning(today);
    clock
}

fn build_coordinator(data: MockData, view: Arc<RecordingView>) -> Arc<DailyInfoCoordinator> {
    let data: Arc<dyn DataProviderPort> = Arc::new(data);
    let settings: Arc<dyn SettingsPort> = Arc::new(InMemorySettings::default());

    let daily_info = Arc::new(GetDailyDisplayInfo::new(
        data.clone(),
        Arc::new(fixed_clock()),
        DailyStatusPolicy::default(),
    ));
    let welcome = Arc::new(ShowWelcomeFlowIfNeeded::new(
        data.clone(),
        settings,
        WelcomeGate::default(),
    ));

    Arc::new(DailyInfoCoordinator::from_deps(DailyInfoCoordinatorDeps {
        daily_info,
        welcome,
        data,
        view,
    }))
}

#[tokio::test]
async fn first_refresh_without_goal_launches_welcome_flow_once() {
    let mut data = MockData::new();
    data.expect_get_goal().returning(|| Ok(None));
    data.expect_get_weight_entry_for_date().returning(|_| Ok(None));

    let view = Arc::new(RecordingView::default());
    let coordinator = build_coordinator(data, view.clone());

    assert_eq!(coordinator.refresh().await, RefreshOutcome::WelcomeFlowLaunched);
    assert_eq!(view.calls(), vec![ViewCall::WelcomeFlow]);

    let outcome = coordinator.refresh().await;
    let RefreshOutcome::Rendered(info) = outcome else {
        panic!("expected a render, got {outcome:?}");
    };
    assert_eq!(info.status, DailyStatus::NoGoal);
    assert_eq!(
        view.calls(),
        vec![
            ViewCall::WelcomeFlow,
            ViewCall::Render(DailyStatus::NoGoal),
            ViewCall::Color(StatusColor::Neutral),
        ]
    );
}

#[tokio::test]
async fn existing_goal_renders_on_first_refresh() {
    let mut data = MockData::new();
    data.expect_get_goal().returning(|| Ok(Some(winter_goal())));
    data.expect_get_weight_entry_for_date()
        .withf(|date| *date == today())
        .returning(|date| Ok(Some(WeightEntry::new(date, 185.0, WeightUnit::Pounds).unwrap())));

    let view = Arc::new(RecordingView::default());
    let coordinator = build_coordinator(data, view.clone());

    let outcome = coordinator.refresh().await;
    assert!(matches!(
        outcome,
        RefreshOutcome::Rendered(ref info) if info.status == DailyStatus::OnTrack
    ));
    assert_eq!(
        view.calls(),
        vec![
            ViewCall::Render(DailyStatus::OnTrack),
            ViewCall::Color(StatusColor::OnTrack),
        ]
    );
}

#[tokio::test]
async fn provider_failure_leaves_view_untouched() {
    let mut data = MockData::new();
    data.expect_get_goal().returning(|| Ok(Some(winter_goal())));
    data.expect_get_weight_entry_for_date().returning(|_| Err(anyhow!("disk unavailable")));

    let view = Arc::new(RecordingView::default());
    let coordinator = build_coordinator(data, view.clone());

    assert_eq!(coordinator.refresh().await, RefreshOutcome::Failed);
    assert!(view.calls().is_empty());
}

#[tokio::test]
async fn welcome_check_failure_still_renders() {
    let mut data = MockData::new();
    let mut goal_calls = 0;
    data.expect_get_goal().returning(move || {
        goal_calls += 1;
        if goal_calls == 1 {
            Err(anyhow!("goal unreadable"))
        } else {
            Ok(Some(winter_goal()))
        }
    });
    data.expect_get_weight_entry_for_date().returning(|_| Ok(None));

    let view = Arc::new(RecordingView::default());
    let coordinator = build_coordinator(data, view.clone());

    let outcome = coordinator.refresh().await;
    assert!(matches!(
        outcome,
        RefreshOutcome::Rendered(ref info) if info.status == DailyStatus::AwaitingEntry
    ));
    assert!(!view.calls().contains(&ViewCall::WelcomeFlow));
}

#[tokio::test]
async fn activation_waits_for_initialization_then_follows_updates() {
    let (tx, rx) = mpsc::channel(8);

    let mut data = MockData::new();
    data.expect_subscribe_updates().return_once(move || Ok(rx));
    data.expect_has_been_initialized().return_const(false);
    data.expect_get_goal().returning(|| Ok(Some(winter_goal())));
    data.expect_get_weight_entry_for_date().returning(|_| Ok(None));

    let view = Arc::new(RecordingView::default());
    let coordinator = build_coordinator(data, view.clone());

    let mut activation = coordinator.activate().await.unwrap();
    assert!(activation.is_active());
    assert_eq!(activation.refresh_count(), 0);
    assert!(view.calls().is_empty());

    tx.send(UserDataEvent::Initialized).await.unwrap();
    activation.wait_for_refreshes(1).await.unwrap();
    assert_eq!(
        view.calls(),
        vec![
            ViewCall::Render(DailyStatus::AwaitingEntry),
            ViewCall::Color(StatusColor::Neutral),
        ]
    );

    tx.send(UserDataEvent::Updated).await.unwrap();
    activation.wait_for_refreshes(2).await.unwrap();
    assert_eq!(view.calls().len(), 4);

    drop(activation);
    for _ in 0..100 {
        if tx.is_closed() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(tx.is_closed(), "dropping the activation should unsubscribe");
}

#[tokio::test]
async fn activation_refreshes_immediately_when_already_initialized() {
    let (_tx, rx) = mpsc::channel(8);

    let mut data = MockData::new();
    data.expect_subscribe_updates().return_once(move || Ok(rx));
    data.expect_has_been_initialized().return_const(true);
    data.expect_get_goal().returning(|| Ok(Some(winter_goal())));
    data.expect_get_weight_entry_for_date().returning(|_| Ok(None));

    let view = Arc::new(RecordingView::default());
    let coordinator = build_coordinator(data, view.clone());

    let activation = coordinator.activate().await.unwrap();

    assert_eq!(activation.refresh_count(), 1);
    assert_eq!(view.calls().len(), 2);
    activation.deactivate();
}

#[tokio::test]
async fn waiting_fails_once_the_event_stream_closes() {
    let (tx, rx) = mpsc::channel(8);

    let mut data = MockData::new();
    data.expect_subscribe_updates().return_once(move || Ok(rx));
    data.expect_has_been_initialized().return_const(false);

    let view = Arc::new(RecordingView::default());
    let coordinator = build_coordinator(data, view);

    let mut activation = coordinator.activate().await.unwrap();
    drop(tx);

    assert!(activation.wait_for_refreshes(1).await.is_err());
}
