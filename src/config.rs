//! TOML configuration: submission timing, initial calendar month, logging.
//!
//! Every key is optional and a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::mail::DEFAULT_DELAY;
use crate::model::CalendarView;

/// Submission timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Log filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Errors that can occur while loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`Config`].
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The platform does not provide a config directory.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// The platform does not provide a data directory.
    #[error("could not determine data directory")]
    NoDataDir,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub submission: Option<SubmissionConfig>,
    pub calendar: Option<CalendarConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmissionConfig {
    pub delay_ms: Option<u64>,
    /// `0` disables the timeout.
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    pub filter: Option<String>,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Delay the simulated mailer waits before confirming.
    pub fn submission_delay(&self) -> Duration {
        self.submission
            .as_ref()
            .and_then(|s| s.delay_ms)
            .map_or(DEFAULT_DELAY, Duration::from_millis)
    }

    /// Upper bound on one submission; `None` waits forever.
    pub fn submission_timeout(&self) -> Option<Duration> {
        match self.submission.as_ref().and_then(|s| s.timeout_ms) {
            None => Some(DEFAULT_TIMEOUT),
            Some(0) => None,
            Some(ms) => Some(Duration::from_millis(ms)),
        }
    }

    /// Calendar to open with: the configured month, falling back to the
    /// month of `today` for any missing or invalid part.
    pub fn initial_calendar(&self, today: NaiveDate) -> CalendarView {
        let calendar = self.calendar.as_ref();
        let year = calendar.and_then(|c| c.year);
        let month = calendar.and_then(|c| c.month);
        let fallback = CalendarView::containing(today);
        match (year, month) {
            (None, None) => fallback,
            (year, month) => CalendarView::new(
                year.unwrap_or(fallback.year()),
                month.unwrap_or(fallback.month()),
            )
            .unwrap_or(fallback),
        }
    }

    /// Tracing filter directive.
    pub fn log_filter(&self) -> &str {
        self.log
            .as_ref()
            .and_then(|l| l.filter.as_deref())
            .unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Log file path: the configured one, or `<data dir>/citas/citas.log`.
    pub fn log_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = self.log.as_ref().and_then(|l| l.path.clone()) {
            return Ok(path);
        }
        let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
        Ok(data_dir.join("citas").join("citas.log"))
    }
}

/// `<config dir>/citas/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_dir.join("citas").join("config.toml"))
}

/// Loads the config at `path`; a missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
