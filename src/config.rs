use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::scores::ScoreConfig;
use crate::sequence::PacingConfig;

/// Upper bound on any single configured delay.
const MAX_DELAY_MS: u64 = 60_000;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pacing: PacingConfig,
    pub scores: ScoreConfig,
    pub logging: LoggingConfig,
}

/// Where log output goes and how verbose it is.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file for the game binary; the terminal is busy with the UI.
    pub file: PathBuf,
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: PathBuf::from("follow_me.log"),
            filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::try_load(path)? {
            Some(config) => Ok(config),
            None => {
                tracing::warn!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Like `load`, but a missing file is `Ok(None)` rather than an error.
    /// Callers that set up logging from the result report the miss themselves.
    pub fn try_load(path: &Path) -> Result<Option<Self>, ConfigError> {
        if path.exists() {
            Self::load(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pacing = &self.pacing;
        if pacing.fast_click_from_level == 0 {
            return Err(ConfigError::Validation(
                "pacing.fast_click_from_level must be >= 1".into(),
            ));
        }
        if pacing.short_press_from_level == 0 {
            return Err(ConfigError::Validation(
                "pacing.short_press_from_level must be >= 1".into(),
            ));
        }

        let delays = [
            ("pacing.lead_in_ms", pacing.lead_in_ms),
            ("pacing.slow_click_delay_ms", pacing.slow_click_delay_ms),
            ("pacing.fast_click_delay_ms", pacing.fast_click_delay_ms),
            ("pacing.long_press_ms", pacing.long_press_ms),
            ("pacing.short_press_ms", pacing.short_press_ms),
        ];
        for (name, value) in delays {
            if value > MAX_DELAY_MS {
                return Err(ConfigError::Validation(format!(
                    "{name} must be <= {MAX_DELAY_MS}"
                )));
            }
        }

        if self.scores.capacity == 0 {
            return Err(ConfigError::Validation(
                "scores.capacity must be >= 1".into(),
            ));
        }
        if self.scores.max_name_len == 0 {
            return Err(ConfigError::Validation(
                "scores.max_name_len must be >= 1".into(),
            ));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
