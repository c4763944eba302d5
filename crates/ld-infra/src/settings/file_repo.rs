use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use ld_core::ports::SettingsPort;
use ld_core::settings::Settings;
use tokio::fs;
use tracing::debug;

use crate::fs::atomic_write;

pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Settings stored as a pretty-printed JSON file.
pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Repository at `base_dir/settings.json`.
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_SETTINGS_FILE))
    }
}

#[async_trait]
impl SettingsPort for FileSettingsRepository {
    /// Loads settings, returning `Settings::default()` when the file is
    /// missing or empty.
    async fn load(&self) -> Result<Settings> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Settings file missing, using defaults");
                return Ok(Settings::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read settings failed: {}", self.path.display()))
            }
        };

        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("parse settings failed: {}", self.path.display()))
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        let content =
            serde_json::to_string_pretty(settings).context("serialize settings failed")?;

        atomic_write(&self.path, &content).await
    }
}
