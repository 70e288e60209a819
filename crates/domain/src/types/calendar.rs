//! Calendar display units and date ranges

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_status_conversions;

/// Unit the schedule is displayed and navigated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum CalendarGranularity {
    Month,
    Week,
    Day,
}

impl_domain_status_conversions!(CalendarGranularity {
    Month => "month",
    Week => "week",
    Day => "day",
});

/// Previous/Next navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavDirection {
    Previous,
    Next,
}

/// Inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Range covering `start..=end`; the bounds are swapped if reversed.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if end < start {
            Self { start: end, end: start }
        } else {
            Self { start, end }
        }
    }

    /// Range covering just `date`.
    pub fn single(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether the two ranges share at least one day.
    pub fn intersects(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Number of days in the range (at least 1).
    pub fn len_days(&self) -> u64 {
        self.end.signed_duration_since(self.start).num_days().unsigned_abs() + 1
    }

    /// Every date in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + Clone {
        let start = self.start;
        (0..self.len_days()).filter_map(move |offset| start.checked_add_days(Days::new(offset)))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_granularity_strings() {
        assert_eq!(CalendarGranularity::Week.to_string(), "week");
        assert_eq!(CalendarGranularity::from_str("Month").unwrap(), CalendarGranularity::Month);
        assert!(CalendarGranularity::from_str("year").is_err());
    }

    #[test]
    fn test_range_days_span_month_boundary() {
        let range = DateRange::new(date(2025, 1, 30), date(2025, 2, 2));
        let days: Vec<_> = range.days().collect();
        assert_eq!(days, vec![date(2025, 1, 30), date(2025, 1, 31), date(2025, 2, 1), date(2025, 2, 2)]);
        assert_eq!(range.len_days(), 4);
    }

    #[test]
    fn test_range_normalises_reversed_bounds() {
        let range = DateRange::new(date(2025, 3, 5), date(2025, 3, 1));
        assert_eq!(range.start, date(2025, 3, 1));
        assert!(range.contains(date(2025, 3, 3)));
        assert!(!range.contains(date(2025, 3, 6)));
    }

    #[test]
    fn test_range_intersects() {
        let feb = DateRange::new(date(2025, 2, 1), date(2025, 2, 28));
        let grid_week = DateRange::new(date(2025, 1, 26), date(2025, 2, 1));
        let january = DateRange::new(date(2025, 1, 1), date(2025, 1, 31));
        assert!(feb.intersects(&grid_week));
        assert!(!feb.intersects(&january));
    }
}
