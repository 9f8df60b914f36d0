use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::settings::SeoSettings;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub scoring: ScoringConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("SEO_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("SEO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let settings_path = env::var("SEO_SETTINGS_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let overrides = LengthOverrides {
            title_min_length: length_var("SEO_TITLE_MIN_LENGTH")?,
            title_max_length: length_var("SEO_TITLE_MAX_LENGTH")?,
            description_min_length: length_var("SEO_DESCRIPTION_MIN_LENGTH")?,
            description_max_length: length_var("SEO_DESCRIPTION_MAX_LENGTH")?,
        };

        Ok(Self {
            environment,
            scoring: ScoringConfig {
                settings_path,
                overrides,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }

    /// Settings snapshot from the configured file and env overrides.
    pub fn settings(&self) -> Result<Option<SeoSettings>, ConfigError> {
        self.scoring.resolve()
    }
}

/// Where threshold settings come from.
#[derive(Debug, Clone, Default)]
pub struct ScoringConfig {
    pub settings_path: Option<PathBuf>,
    pub overrides: LengthOverrides,
}

impl ScoringConfig {
    /// `None` when neither a file nor an override is configured.
    pub fn resolve(&self) -> Result<Option<SeoSettings>, ConfigError> {
        let base = match &self.settings_path {
            Some(path) => Some(load_settings_file(path)?),
            None => None,
        };

        if base.is_none() && self.overrides.is_empty() {
            return Ok(None);
        }

        Ok(Some(self.overrides.apply(base.unwrap_or_default())))
    }
}

/// Individual length thresholds set through the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthOverrides {
    pub title_min_length: Option<usize>,
    pub title_max_length: Option<usize>,
    pub description_min_length: Option<usize>,
    pub description_max_length: Option<usize>,
}

impl LengthOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, mut settings: SeoSettings) -> SeoSettings {
        if let Some(value) = self.title_min_length {
            settings.title_min_length = value;
        }
        if let Some(value) = self.title_max_length {
            settings.title_max_length = value;
        }
        if let Some(value) = self.description_min_length {
            settings.description_min_length = value;
        }
        if let Some(value) = self.description_max_length {
            settings.description_max_length = value;
        }
        settings
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Reads a JSON settings document; missing keys keep their defaults.
pub fn load_settings_file(path: &Path) -> Result<SeoSettings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::SettingsRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::SettingsParse {
        path: path.to_path_buf(),
        source,
    })
}

fn length_var(name: &'static str) -> Result<Option<usize>, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidLength { variable: name, value }),
        _ => Ok(None),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidLength {
        variable: &'static str,
        value: String,
    },
    SettingsRead {
        path: PathBuf,
        source: std::io::Error,
    },
    SettingsParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLength { variable, value } => {
                write!(f, "{variable} must be a non-negative integer, got '{value}'")
            }
            ConfigError::SettingsRead { path, .. } => {
                write!(f, "unable to read settings file {}", path.display())
            }
            ConfigError::SettingsParse { path, .. } => {
                write!(f, "settings file {} is not valid JSON", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidLength { .. } => None,
            ConfigError::SettingsRead { source, .. } => Some(source),
            ConfigError::SettingsParse { source, .. } => Some(source),
        }
    }
}
