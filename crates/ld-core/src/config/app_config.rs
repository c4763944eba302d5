use std::path::PathBuf;

/// Optional overrides for the daily status thresholds.
///
/// `None` means "not present in the config file".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyOverrides {
    pub significantly_off_fraction: Option<f64>,
    pub significantly_off_floor_pounds: Option<f64>,
    pub maintenance_band_pounds: Option<f64>,
}

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding user data, settings and logs (may be empty - the
    /// host falls back to the platform data dir)
    pub data_dir: PathBuf,

    /// Always launch the welcome flow (debug aid)
    pub force_show_welcome: bool,

    /// Also write logs to a file under the data dir
    pub file_logging: bool,

    pub policy: PolicyOverrides,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// This method does not validate or compute defaults. Missing keys
    /// become empty values.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let policy = toml_value.get("policy");

        Ok(Self {
            data_dir: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("data_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            force_show_welcome: toml_value
                .get("debug")
                .and_then(|d| d.get("force_show_welcome"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            file_logging: toml_value
                .get("logging")
                .and_then(|l| l.get("file_logging"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            policy: PolicyOverrides {
                significantly_off_fraction: number(policy, "significantly_off_fraction"),
                significantly_off_floor_pounds: number(policy, "significantly_off_floor_pounds"),
                maintenance_band_pounds: number(policy, "maintenance_band_pounds"),
            },
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            data_dir: PathBuf::new(),
            force_show_welcome: false,
            file_logging: false,
            policy: PolicyOverrides::default(),
        }
    }

    /// Create AppConfig rooted at a platform data directory computed by the
    /// caller (e.g. with the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            ..Self::empty()
        }
    }
}

fn number(section: Option<&toml::Value>, key: &str) -> Option<f64> {
    let value = section?.get(key)?;
    value
        .as_float()
        .or_else(|| value.as_integer().map(|i| i as f64))
}
