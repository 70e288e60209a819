//! Scheduling constants
//!
//! Defaults for the office-hours policy and booking options. Every value here
//! can be overridden through configuration.

// Office hours (minutes since midnight)
pub const DEFAULT_OPENS_AT_MINUTES: u16 = 8 * 60; // 08:00
pub const DEFAULT_CLOSES_AT_MINUTES: u16 = 18 * 60; // 18:00
/// Step between generated start times when nothing else is configured.
pub const DEFAULT_SLOT_GRANULARITY_MINUTES: u16 = 30;

// Interview durations offered at booking time
pub const DEFAULT_DURATION_OPTIONS: [u16; 5] = [15, 30, 45, 60, 90];

// Wall-clock bounds
pub const MINUTES_PER_HOUR: u16 = 60;
pub const MINUTES_PER_DAY: u16 = 24 * 60;

// Draft persistence
/// Draft store keys are this prefix followed by the interview id.
pub const FEEDBACK_DRAFT_KEY_PREFIX: &str = "feedback-draft:";

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";
