//! (year, month, week, day) selection held by calendar pickers

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use talentdesk_domain::Result;

use super::navigator::{grid_week_number, with_day, with_month, with_week, with_year};

/// Picker state that always denotes a real date
///
/// Built from a date; every setter returns a new selection whose fields are
/// re-derived from the adjusted date, so `week` always matches the grid row
/// of `(year, month, day)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "SelectionFields", try_from = "SelectionFields")]
pub struct CalendarSelection {
    date: NaiveDate,
}

impl CalendarSelection {
    /// Selection pointing at `date`.
    pub const fn from_date(date: NaiveDate) -> Self {
        Self { date }
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Grid week number of the selected day.
    pub fn week(&self) -> u32 {
        grid_week_number(self.date)
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// # Errors
    /// Returns `InvalidInput` if `year` is unrepresentable.
    pub fn set_year(self, year: i32) -> Result<Self> {
        with_year(self.date, year).map(Self::from_date)
    }

    /// # Errors
    /// Returns `InvalidInput` for a month outside 1..=12.
    pub fn set_month(self, month: u32) -> Result<Self> {
        with_month(self.date, month).map(Self::from_date)
    }

    /// Jump to grid week `week`; see [`with_week`].
    #[must_use]
    pub fn set_week(self, week: u32) -> Self {
        Self::from_date(with_week(self.date, week))
    }

    /// Change the day, clamped into the current month.
    #[must_use]
    pub fn set_day(self, day: u32) -> Self {
        Self::from_date(with_day(self.date, day))
    }
}

impl From<NaiveDate> for CalendarSelection {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

/// Wire form exposing every field to the UI
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct SelectionFields {
    year: i32,
    month: u32,
    week: u32,
    day: u32,
}

impl From<CalendarSelection> for SelectionFields {
    fn from(selection: CalendarSelection) -> Self {
        Self {
            year: selection.year(),
            month: selection.month(),
            week: selection.week(),
            day: selection.day(),
        }
    }
}

impl TryFrom<SelectionFields> for CalendarSelection {
    type Error = talentdesk_domain::TalentDeskError;

    // `week` is derived, so incoming values are recomputed rather than trusted.
    fn try_from(fields: SelectionFields) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(fields.year, 1, 1).ok_or_else(|| {
            talentdesk_domain::TalentDeskError::InvalidInput(format!(
                "year {} is out of range",
                fields.year
            ))
        })?;
        let in_month = with_month(first, fields.month)?;
        Ok(Self::from_date(with_day(in_month, fields.day)))
    }
}
