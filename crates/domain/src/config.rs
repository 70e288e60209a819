//! Configuration structures
//!
//! Loaded by `talentdesk-infra` from the environment or a TOML/JSON file.
//! Every section has defaults so a partial file is valid.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DURATION_OPTIONS, DEFAULT_LOG_LEVEL, DEFAULT_SLOT_GRANULARITY_MINUTES};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub office_hours: OfficeHoursConfig,
    pub logging: LoggingConfig,
}

/// Office hours and booking options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficeHoursConfig {
    /// Opening time, `"08:00"` or `"8:00 AM"`.
    pub opens_at: String,
    /// Closing time.
    pub closes_at: String,
    pub granularity_minutes: u16,
    /// Weekdays with no bookable hours.
    pub closed_weekdays: Vec<Weekday>,
    /// Per-weekday hours replacing the default window.
    pub weekday_overrides: Vec<WeekdayHoursConfig>,
    /// Individual closed dates (holidays).
    pub closed_dates: Vec<NaiveDate>,
    /// Durations offered at booking time, in minutes.
    pub duration_options: Vec<u16>,
}

impl Default for OfficeHoursConfig {
    fn default() -> Self {
        Self {
            opens_at: "08:00".to_string(),
            closes_at: "18:00".to_string(),
            granularity_minutes: DEFAULT_SLOT_GRANULARITY_MINUTES,
            closed_weekdays: Vec::new(),
            weekday_overrides: Vec::new(),
            closed_dates: Vec::new(),
            duration_options: DEFAULT_DURATION_OPTIONS.to_vec(),
        }
    }
}

/// Hours for one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayHoursConfig {
    pub weekday: Weekday,
    pub opens_at: String,
    pub closes_at: String,
    #[serde(default)]
    pub granularity_minutes: Option<u16>,
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), json: false }
    }
}
