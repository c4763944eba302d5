//! Plain-text rendering of the daily screen.

use std::io::{self, Write};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use ld_core::ports::DailyInfoViewPort;
use ld_core::{DailyDisplayInfo, StatusColor};

const ENTER_WEIGHT_HINT: &str = "linediet log <weight> [--kg]";
const SET_GOAL_HINT: &str =
    "linediet goal <start-date> <start-weight> <goal-date> <goal-weight> [--kg]";

/// [`DailyInfoViewPort`] that writes the daily screen as text lines.
pub struct ConsoleView<W> {
    out: Mutex<W>,
}

impl ConsoleView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_lines(&self, lines: &[String]) -> Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| anyhow!("console view writer poisoned"))?;
        for line in lines {
            writeln!(out, "{line}").context("write to console")?;
        }
        out.flush().context("flush console")
    }
}

fn color_label(color: StatusColor) -> &'static str {
    match color {
        StatusColor::Neutral => "neutral",
        StatusColor::OnTrack => "green",
        StatusColor::OffTrack => "red",
        StatusColor::GoalReached => "gold",
    }
}

#[async_trait]
impl<W: Write + Send> DailyInfoViewPort for ConsoleView<W> {
    async fn render(&self, info: &DailyDisplayInfo) -> Result<()> {
        let mut lines = vec![
            format!("Today: {}", info.todays_display_weight),
            info.todays_message.clone(),
        ];
        if !info.how_to_eat_message.is_empty() {
            lines.push(format!("How to eat: {}", info.how_to_eat_message));
        }

        if info.is_enter_weight_button_visible {
            lines.push(format!("Enter weight: {ENTER_WEIGHT_HINT}"));
        }
        if info.is_set_goal_button_visible {
            lines.push(format!("Set goal: {SET_GOAL_HINT}"));
        }

        self.write_lines(&lines)
    }

    async fn apply_color(&self, color: StatusColor) -> Result<()> {
        self.write_lines(&[format!("Color: {}", color_label(color))])
    }

    async fn launch_welcome_flow(&self) -> Result<()> {
        self.write_lines(&[
            "Welcome to LineDiet!".to_string(),
            "Set a goal to get a daily line to follow.".to_string(),
            format!("Set goal: {SET_GOAL_HINT}"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ld_core::{compute_daily_status, WeightEntry, WeightLossGoal, WeightUnit};

    #[tokio::test]
    async fn test_render_lists_visible_actions() {
        let view = ConsoleView::new(Vec::new());
        let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let info = compute_daily_status(None, None, today);

        view.render(&info).await.unwrap();
        view.apply_color(info.color_to_show).await.unwrap();

        let text = String::from_utf8(view.into_inner()).unwrap();
        assert!(text.contains("Today: --"));
        assert!(text.contains("Enter weight: linediet log <weight> [--kg]"));
        assert!(text.contains("Set goal: linediet goal <start-date>"));
        assert!(text.ends_with("Color: neutral\n"));
        assert!(!text.contains("How to eat"));
    }

    #[tokio::test]
    async fn test_render_hides_actions_after_weigh_in() {
        let view = ConsoleView::new(Vec::new());
        let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let goal = WeightLossGoal::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            200.0,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            180.0,
            WeightUnit::Pounds,
        )
        .unwrap();
        let entry = WeightEntry::new(today, 185.0, WeightUnit::Pounds).unwrap();
        let info = compute_daily_status(Some(&goal), Some(&entry), today);

        view.render(&info).await.unwrap();

        let text = String::from_utf8(view.into_inner()).unwrap();
        assert!(text.starts_with("Today: 185.0 lbs\n"));
        assert!(text.contains("How to eat: "));
        assert!(!text.contains("linediet log"));
        assert!(!text.contains("linediet goal"));
    }

    #[tokio::test]
    async fn test_welcome_flow_prints_greeting() {
        let view = ConsoleView::new(Vec::new());

        view.launch_welcome_flow().await.unwrap();

        let text = String::from_utf8(view.into_inner()).unwrap();
        assert!(text.starts_with("Welcome to LineDiet!"));
    }
}
