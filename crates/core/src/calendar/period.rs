//! Period navigation and labels for the month/week/day views

use chrono::{Datelike, Months, NaiveDate};
use talentdesk_domain::{CalendarGranularity, DateRange, NavDirection};

use super::navigator::{end_of_month, shift_days, start_of_month, week_grid_start};
use crate::clock::Clock;

/// Move one display unit backwards or forwards.
///
/// Month steps keep the day where possible and clamp otherwise
/// (Jan 31 -> Feb 28/29). At the edge of chrono's range the date is returned
/// unchanged.
pub fn shift(granularity: CalendarGranularity, date: NaiveDate, direction: NavDirection) -> NaiveDate {
    let moved = match (granularity, direction) {
        (CalendarGranularity::Month, NavDirection::Previous) => date.checked_sub_months(Months::new(1)),
        (CalendarGranularity::Month, NavDirection::Next) => date.checked_add_months(Months::new(1)),
        (CalendarGranularity::Week, NavDirection::Previous) => shift_days(date, -7),
        (CalendarGranularity::Week, NavDirection::Next) => shift_days(date, 7),
        (CalendarGranularity::Day, NavDirection::Previous) => date.pred_opt(),
        (CalendarGranularity::Day, NavDirection::Next) => date.succ_opt(),
    };
    moved.unwrap_or(date)
}

/// The "Today" button target.
pub fn today(clock: &dyn Clock) -> NaiveDate {
    clock.today()
}

/// Dates covered by the view of `granularity` around `date`.
pub fn display_range(granularity: CalendarGranularity, date: NaiveDate) -> DateRange {
    match granularity {
        CalendarGranularity::Month => DateRange::new(start_of_month(date), end_of_month(date)),
        CalendarGranularity::Week => grid_week(date),
        CalendarGranularity::Day => DateRange::single(date),
    }
}

/// Full Sunday..Saturday rows needed to draw the month containing `date`.
pub fn month_grid_range(date: NaiveDate) -> DateRange {
    let start = week_grid_start(start_of_month(date));
    let last = end_of_month(date);
    let end = shift_days(last, 6 - i64::from(last.weekday().num_days_from_sunday())).unwrap_or(last);
    DateRange::new(start, end)
}

/// Header text for the view, e.g. `"June 2025"`.
pub fn period_label(granularity: CalendarGranularity, date: NaiveDate) -> String {
    match granularity {
        CalendarGranularity::Month => date.format("%B %Y").to_string(),
        CalendarGranularity::Week => {
            let DateRange { start, end } = grid_week(date);
            if start.year() == end.year() {
                format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
            } else {
                format!("{} - {}", start.format("%b %-d, %Y"), end.format("%b %-d, %Y"))
            }
        }
        CalendarGranularity::Day => date.format("%A, %B %-d, %Y").to_string(),
    }
}

fn grid_week(date: NaiveDate) -> DateRange {
    let start = week_grid_start(date);
    DateRange::new(start, shift_days(start, 6).unwrap_or(start))
}
