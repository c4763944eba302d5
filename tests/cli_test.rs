//! Runs the `linediet` binary against a throwaway data directory.

use std::path::Path;
use std::process::{Command, Output};

use chrono::{Days, Local};
use tempfile::TempDir;

fn write_config(dir: &TempDir) -> std::path::PathBuf {
    let data_dir = dir.path().join("data");
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!("[storage]\ndata_dir = '{}'\n", data_dir.display()),
    )
    .unwrap();
    config_path
}

fn linediet(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_linediet"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env("RUST_LOG", "info")
        .env_remove("LINEDIET_CONFIG")
        .output()
        .expect("Failed to execute binary")
}

fn set_goal_around_today(config: &Path) -> Output {
    let today = Local::now().date_naive();
    let start = (today - Days::new(10)).to_string();
    let goal = (today + Days::new(50)).to_string();
    linediet(config, &["goal", &start, "200", &goal, "180"])
}

#[test]
fn test_logs_go_to_stderr_and_the_view_to_stdout() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    let output = linediet(&config, &[]);

    assert!(output.status.success(), "show should exit with code 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stdout.starts_with("Welcome to LineDiet!"));
    assert!(
        !stdout.contains("User data loaded"),
        "stdout should only carry the daily view, got:\n{stdout}"
    );
    assert!(!stdout.contains("INFO"));
    assert!(stderr.contains("User data loaded"));
}

#[test]
fn test_goal_then_log_rerender_the_day() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    let output = set_goal_around_today(&config);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Today: --"));
    assert!(stdout.contains("Enter weight: linediet log <weight> [--kg]"));

    let output = linediet(&config, &["log", "185"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Today: 185.0 lbs"));
    assert!(stdout.trim_end().ends_with("Color: green"));

    assert!(dir.path().join("data").join("user_data.json").is_file());
}

#[test]
fn test_invalid_weight_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    let output = linediet(&config, &["log", "0"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid input"));
    assert!(!dir.path().join("data").join("user_data.json").exists());
}
