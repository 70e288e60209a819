//! Calendar arithmetic
//!
//! ISO-8601 week numbers, month lengths and field transitions that always
//! land on a real date. Week *numbers* follow ISO (Monday start, week 1
//! holds the year's first Thursday) while the display grid is Sunday-aligned;
//! a grid row is labelled with the ISO number of its Monday. All arithmetic
//! runs on `NaiveDate`, so daylight-saving changes cannot shift a result.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use talentdesk_domain::{Result, TalentDeskError};

/// ISO weekday, Monday = 1 through Sunday = 7.
pub fn iso_weekday(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

/// ISO-8601 week number (1..=53).
///
/// Moves to the Thursday of the date's week and counts how many weeks into
/// that Thursday's year it falls.
pub fn iso_week_number(date: NaiveDate) -> u32 {
    let offset = 4 - i64::from(iso_weekday(date));
    match shift_days(date, offset) {
        Some(thursday) => thursday.ordinal().div_ceil(7),
        None => date.iso_week().week(),
    }
}

/// Number of ISO weeks in `year` (52 or 53).
pub fn iso_weeks_in_year(year: i32) -> u32 {
    // Dec 28 always falls in the year's last ISO week
    NaiveDate::from_ymd_opt(year, 12, 28).map_or(52, iso_week_number)
}

/// Days in `month` of `year`.
///
/// # Errors
/// Returns `InvalidInput` for a month outside 1..=12 or an unrepresentable
/// year.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = first_of_month(year, month)?;
    Ok(month_length(first))
}

/// Sunday on or before `date`; first day of its display row.
pub fn week_grid_start(date: NaiveDate) -> NaiveDate {
    let back = i64::from(date.weekday().num_days_from_sunday());
    shift_days(date, -back).unwrap_or(date)
}

/// Week number shown for the Sunday-aligned row containing `date`.
pub fn grid_week_number(date: NaiveDate) -> u32 {
    let sunday = week_grid_start(date);
    shift_days(sunday, 1).map_or_else(|| iso_week_number(date), iso_week_number)
}

/// Week numbers of every grid row that touches the month, ascending.
///
/// Rows that straddle a month boundary are included as long as they contain
/// at least one day of the month. Around New Year the numbering wraps, so
/// December may report week 1 and January week 52 or 53.
///
/// # Errors
/// Returns `InvalidInput` for a month outside 1..=12.
pub fn weeks_in_month(year: i32, month: u32) -> Result<Vec<u32>> {
    let first = first_of_month(year, month)?;

    let mut weeks: Vec<u32> = month_rows(first).map(grid_week_number).collect();
    weeks.sort_unstable();
    weeks.dedup();
    Ok(weeks)
}

/// Same day in `month`, clamped to the month's last day.
///
/// # Errors
/// Returns `InvalidInput` for a month outside 1..=12.
pub fn with_month(date: NaiveDate, month: u32) -> Result<NaiveDate> {
    clamp_into(date.year(), month, date.day())
}

/// Same month and day in `year`; Feb 29 becomes Feb 28 in common years.
///
/// # Errors
/// Returns `InvalidInput` if `year` is outside chrono's range.
pub fn with_year(date: NaiveDate, year: i32) -> Result<NaiveDate> {
    clamp_into(year, date.month(), date.day())
}

/// `day` of the date's month, clamped into `1..=days_in_month`.
pub fn with_day(date: NaiveDate, day: u32) -> NaiveDate {
    let day = day.clamp(1, month_length(date));
    date.with_day(day).unwrap_or(date)
}

/// Sunday that opens grid week `week`.
///
/// A row of the date's month carrying that number wins, so every entry of
/// [`weeks_in_month`] is reachable from inside the month even when the row
/// crosses New Year. Otherwise the week is taken from the date's calendar
/// year, clamped to that year's ISO weeks, so the result always satisfies
/// `grid_week_number(with_week(d, n)) == n` for in-range `n`.
pub fn with_week(date: NaiveDate, week: u32) -> NaiveDate {
    if let Some(sunday) =
        month_rows(start_of_month(date)).find(|sunday| grid_week_number(*sunday) == week)
    {
        return sunday;
    }

    let year = date.year();
    let week = week.clamp(1, iso_weeks_in_year(year));
    NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
        .and_then(|monday| monday.pred_opt())
        .unwrap_or(date)
}

/// First day of the date's month.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the date's month.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    last_of_month(start_of_month(date))
}

pub(crate) fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// Sundays of the grid rows that touch the month starting at `first`.
fn month_rows(first: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let last = last_of_month(first);
    std::iter::successors(Some(week_grid_start(first)), |sunday| shift_days(*sunday, 7))
        .take_while(move |sunday| *sunday <= last)
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(TalentDeskError::InvalidInput(format!("month must be 1-12, got {month}")));
    }
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| TalentDeskError::InvalidInput(format!("year {year} is out of range")))
}

fn clamp_into(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    let first = first_of_month(year, month)?;
    let day = day.clamp(1, month_length(first));
    first.with_day(day).ok_or_else(|| {
        TalentDeskError::Internal(format!("day {day} rejected for {year}-{month:02}"))
    })
}

fn month_length(date: NaiveDate) -> u32 {
    last_of_month(date).day()
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    let first = date.with_day(1).unwrap_or(date);
    first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        // December of chrono's final year
        .unwrap_or_else(|| first.with_day(31).unwrap_or(first))
}
