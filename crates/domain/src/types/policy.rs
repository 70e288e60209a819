//! Office-hours policy
//!
//! Describes when interviews may be booked: one optional window per weekday,
//! a set of closed calendar dates, and the durations offered at booking time.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::time_of_day::TimeOfDay;
use crate::config::OfficeHoursConfig;
use crate::constants::{
    DEFAULT_CLOSES_AT_MINUTES, DEFAULT_DURATION_OPTIONS, DEFAULT_OPENS_AT_MINUTES,
    DEFAULT_SLOT_GRANULARITY_MINUTES, MINUTES_PER_HOUR,
};
use crate::errors::{Result, TalentDeskError};

/// Bookable hours for a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", try_from = "RawOfficeWindow")]
pub struct OfficeWindow {
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    opens_at: TimeOfDay,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    closes_at: TimeOfDay,
    granularity_minutes: u16,
}

impl OfficeWindow {
    /// Build a validated window.
    ///
    /// # Errors
    /// Returns `InvalidInput` unless `closes_at > opens_at`, the granularity
    /// is positive, and the granularity divides the window length evenly.
    pub fn new(opens_at: TimeOfDay, closes_at: TimeOfDay, granularity_minutes: u16) -> Result<Self> {
        if closes_at <= opens_at {
            return Err(TalentDeskError::InvalidInput(format!(
                "office window must close after it opens ({opens_at} - {closes_at})"
            )));
        }
        if granularity_minutes == 0 {
            return Err(TalentDeskError::InvalidInput(
                "slot granularity must be positive".to_string(),
            ));
        }
        let length = closes_at.minutes() - opens_at.minutes();
        if length % granularity_minutes != 0 {
            return Err(TalentDeskError::InvalidInput(format!(
                "granularity of {granularity_minutes} minutes does not divide the \
                 {length}-minute window {opens_at} - {closes_at}"
            )));
        }
        Ok(Self { opens_at, closes_at, granularity_minutes })
    }

    /// First bookable minute.
    pub const fn opens_at(&self) -> TimeOfDay {
        self.opens_at
    }

    /// Every slot must end by this time.
    pub const fn closes_at(&self) -> TimeOfDay {
        self.closes_at
    }

    /// Step between candidate start times; never zero.
    pub const fn granularity_minutes(&self) -> u16 {
        self.granularity_minutes
    }

    /// Minutes from opening to closing; positive for any built window.
    pub const fn length_minutes(&self) -> u16 {
        self.closes_at.minutes().saturating_sub(self.opens_at.minutes())
    }

    /// Whether `[start, start + duration)` lies fully inside the window.
    pub fn contains(&self, start: TimeOfDay, duration_minutes: u16) -> bool {
        let end = u32::from(start.minutes()) + u32::from(duration_minutes);
        start >= self.opens_at && end <= u32::from(self.closes_at.minutes())
    }

    /// Whether `start` falls on a generated slot boundary.
    pub fn is_aligned(&self, start: TimeOfDay) -> bool {
        start >= self.opens_at
            && (start.minutes() - self.opens_at.minutes()) % self.granularity_minutes == 0
    }

    /// Full-hour marks from opening to closing, inclusive.
    ///
    /// The day view draws one row per mark; with the default 08:00-18:00
    /// window that is 11 rows and 08:00 is index 0.
    pub fn hour_marks(&self) -> Vec<TimeOfDay> {
        let first_hour = self.opens_at.minutes().div_ceil(MINUTES_PER_HOUR);
        let last_hour = self.closes_at.minutes() / MINUTES_PER_HOUR;
        (first_hour..=last_hour).filter_map(|hour| TimeOfDay::from_hm(hour, 0)).collect()
    }
}

impl Default for OfficeWindow {
    fn default() -> Self {
        Self {
            opens_at: TimeOfDay::from_minutes(DEFAULT_OPENS_AT_MINUTES).unwrap_or(TimeOfDay::MIDNIGHT),
            closes_at: TimeOfDay::from_minutes(DEFAULT_CLOSES_AT_MINUTES)
                .unwrap_or(TimeOfDay::MIDNIGHT),
            granularity_minutes: DEFAULT_SLOT_GRANULARITY_MINUTES,
        }
    }
}

/// Wire shape of [`OfficeWindow`], checked by [`OfficeWindow::new`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOfficeWindow {
    opens_at: TimeOfDay,
    closes_at: TimeOfDay,
    granularity_minutes: u16,
}

impl TryFrom<RawOfficeWindow> for OfficeWindow {
    type Error = TalentDeskError;

    fn try_from(raw: RawOfficeWindow) -> Result<Self> {
        Self::new(raw.opens_at, raw.closes_at, raw.granularity_minutes)
    }
}

/// Bookable hours per weekday plus closed dates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOfficeHoursPolicy")]
pub struct OfficeHoursPolicy {
    /// Indexed by `Weekday::num_days_from_monday`.
    weekly: [Option<OfficeWindow>; 7],
    closed_dates: BTreeSet<NaiveDate>,
    duration_options: Vec<u16>,
}

impl OfficeHoursPolicy {
    /// Same window every day of the week.
    pub fn uniform(window: OfficeWindow) -> Self {
        Self {
            weekly: [Some(window); 7],
            closed_dates: BTreeSet::new(),
            duration_options: DEFAULT_DURATION_OPTIONS.to_vec(),
        }
    }

    /// Build and validate a policy from configuration.
    ///
    /// # Errors
    /// Returns `InvalidInput` for unparseable times, invalid windows or an
    /// empty/zero duration list.
    pub fn from_config(config: &OfficeHoursConfig) -> Result<Self> {
        let opens_at = TimeOfDay::parse(&config.opens_at)?;
        let closes_at = TimeOfDay::parse(&config.closes_at)?;
        let default_window = OfficeWindow::new(opens_at, closes_at, config.granularity_minutes)?;

        let mut policy = Self::uniform(default_window);

        for over in &config.weekday_overrides {
            let window = OfficeWindow::new(
                TimeOfDay::parse(&over.opens_at)?,
                TimeOfDay::parse(&over.closes_at)?,
                over.granularity_minutes.unwrap_or(config.granularity_minutes),
            )?;
            policy = policy.with_window(over.weekday, Some(window));
        }
        for weekday in &config.closed_weekdays {
            policy = policy.with_window(*weekday, None);
        }

        policy.closed_dates = config.closed_dates.iter().copied().collect();
        policy = policy.with_duration_options(config.duration_options.clone())?;
        Ok(policy)
    }

    /// Replace the window for `weekday`; `None` closes that day.
    #[must_use]
    pub fn with_window(mut self, weekday: Weekday, window: Option<OfficeWindow>) -> Self {
        self.weekly[weekday.num_days_from_monday() as usize] = window;
        self
    }

    /// Close a single calendar date, e.g. a public holiday.
    #[must_use]
    pub fn with_closed_date(mut self, date: NaiveDate) -> Self {
        self.closed_dates.insert(date);
        self
    }

    /// Replace the bookable durations.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the list is empty or contains zero.
    pub fn with_duration_options(mut self, mut options: Vec<u16>) -> Result<Self> {
        if options.is_empty() || options.contains(&0) {
            return Err(TalentDeskError::InvalidInput(
                "duration options must be a non-empty list of positive minutes".to_string(),
            ));
        }
        options.sort_unstable();
        options.dedup();
        self.duration_options = options;
        Ok(self)
    }

    /// Window for `date`, or `None` when nothing can be booked that day.
    pub fn window_for(&self, date: NaiveDate) -> Option<OfficeWindow> {
        if self.closed_dates.contains(&date) {
            return None;
        }
        self.weekly[date.weekday().num_days_from_monday() as usize]
    }

    /// Weekly window for `weekday`, ignoring closed dates.
    pub fn window_for_weekday(&self, weekday: Weekday) -> Option<OfficeWindow> {
        self.weekly[weekday.num_days_from_monday() as usize]
    }

    /// Bookable durations in minutes, ascending.
    pub fn duration_options(&self) -> &[u16] {
        &self.duration_options
    }

    /// Whether a booking may last `duration_minutes`.
    pub fn accepts_duration(&self, duration_minutes: u16) -> bool {
        self.duration_options.contains(&duration_minutes)
    }
}

#[derive(Deserialize)]
struct RawOfficeHoursPolicy {
    weekly: [Option<OfficeWindow>; 7],
    #[serde(default)]
    closed_dates: BTreeSet<NaiveDate>,
    duration_options: Vec<u16>,
}

impl TryFrom<RawOfficeHoursPolicy> for OfficeHoursPolicy {
    type Error = TalentDeskError;

    fn try_from(raw: RawOfficeHoursPolicy) -> Result<Self> {
        let policy = Self {
            weekly: raw.weekly,
            closed_dates: raw.closed_dates,
            duration_options: Vec::new(),
        };
        policy.with_duration_options(raw.duration_options)
    }
}

impl Default for OfficeHoursPolicy {
    fn default() -> Self {
        Self::uniform(OfficeWindow::default())
    }
}
