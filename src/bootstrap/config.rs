//! # Configuration Loader
//!
//! Reads the TOML config file and maps it onto the [`AppConfig`] DTO.
//! Loading accepts whatever is in the file; deciding what an empty value
//! means happens in [`resolve_data_dir`] and the policy overrides.

use std::path::PathBuf;

use anyhow::Context;
use ld_core::config::AppConfig;
use tracing::info;

/// Environment variable that points at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "LINEDIET_CONFIG";

const APP_DIR_NAME: &str = "linediet";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config as TOML: {}", config_path.display()))?;
    AppConfig::from_toml(&toml_value)
}

/// Like [`load_config`], but a missing file (or no known path at all) gives
/// [`AppConfig::empty`]. A file that exists but is broken is still an error.
pub fn load_config_or_default(config_path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    match config_path {
        Some(path) if path.exists() => load_config(path),
        Some(path) => {
            info!(path = %path.display(), "No config file found, using defaults");
            Ok(AppConfig::empty())
        }
        None => Ok(AppConfig::empty()),
    }
}

/// `$LINEDIET_CONFIG`, else `<config_dir>/linediet/config.toml`.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Directory for user data, settings and logs.
///
/// An empty `data_dir` in the config means the platform data directory.
pub fn resolve_data_dir(config: &AppConfig) -> anyhow::Result<PathBuf> {
    if !config.data_dir.as_os_str().is_empty() {
        return Ok(config.data_dir.clone());
    }
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .context("Could not determine platform data directory; set [storage] data_dir")
}
