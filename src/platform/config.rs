// DataBudget - platform/config.rs
//
// Platform data directory resolution and config.toml loading with startup
// validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for DataBudget data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/databudget/ or %APPDATA%\DataBudget\config\)
    pub config_dir: PathBuf,

    /// Data directory holding the offers storage slot.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[search]` section.
    pub search: SearchSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[search]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// Budget shortcut buttons (FCFA).
    pub quick_budgets: Option<Vec<i64>>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Budget shortcut buttons (FCFA).
    pub quick_budgets: Vec<i64>,
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            quick_budgets: constants::DEFAULT_QUICK_BUDGETS.to_vec(),
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// problems. A missing file yields defaults with no warnings (first run);
/// an unreadable or unparseable file yields defaults and one warning.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<ConfigError>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path,
                source: e,
            };
            return (AppConfig::default(), vec![err]);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path,
                source: e,
            };
            return (AppConfig::default(), vec![err]);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");
    validate(raw)
}

/// Validate each field against named constants, accumulating all errors.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<ConfigError>) {
    let mut config = AppConfig::default();
    let mut warnings = Vec::new();

    // -- Search: quick_budgets --
    if let Some(budgets) = raw.search.quick_budgets {
        let count_ok = (1..=constants::MAX_QUICK_BUDGETS).contains(&budgets.len());
        let values_ok = budgets
            .iter()
            .all(|b| (constants::MIN_QUICK_BUDGET..=constants::MAX_QUICK_BUDGET).contains(b));
        if count_ok && values_ok {
            config.quick_budgets = budgets;
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "search.quick_budgets".to_string(),
                value: format!("{budgets:?}"),
                expected: format!(
                    "1-{} values, each {}-{}",
                    constants::MAX_QUICK_BUDGETS,
                    constants::MIN_QUICK_BUDGET,
                    constants::MAX_QUICK_BUDGET,
                ),
            });
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            _ => warnings.push(ConfigError::ValueOutOfRange {
                field: "ui.theme".to_string(),
                value: theme.clone(),
                expected: "\"dark\" or \"light\"".to_string(),
            }),
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "ui.font_size".to_string(),
                value: size.to_string(),
                expected: format!("{}-{}", constants::MIN_FONT_SIZE, constants::MAX_FONT_SIZE),
            });
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "logging.level".to_string(),
                value: level.clone(),
                expected: valid.join(", "),
            });
        }
    }

    (config, warnings)
}
