//! Schedule view composition
//!
//! Turns `(granularity, date, interviews)` into the per-day data a month,
//! week or day view renders. No rendering happens here.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use talentdesk_domain::{CalendarGranularity, DateRange, Interview, TimeOfDay};

use crate::calendar::{display_range, month_grid_range, period_label};
use crate::scheduling::AvailabilityQuery;

/// One rendered day cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayView {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_past: bool,
    /// False for leading/trailing days of a month grid.
    pub in_focus_month: bool,
    /// Interviews on this date in start order; unparseable times sort last.
    pub interviews: Vec<Interview>,
    pub available_slot_count: usize,
    pub has_available_slots: bool,
}

/// Everything a month, week or day view needs for one period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleView {
    pub granularity: CalendarGranularity,
    pub label: String,
    /// Period the view is about; a month grid may draw extra days around it.
    pub range: DateRange,
    pub focus: NaiveDate,
    pub days: Vec<DayView>,
    /// Hourly rows for the day view, empty otherwise or when closed.
    pub hour_marks: Vec<TimeOfDay>,
}

/// Builds [`ScheduleView`]s from an availability query
#[derive(Debug, Clone)]
pub struct ScheduleViewComposer {
    availability: AvailabilityQuery,
}

impl ScheduleViewComposer {
    /// Composer over `availability`.
    pub fn new(availability: AvailabilityQuery) -> Self {
        Self { availability }
    }

    pub fn availability(&self) -> &AvailabilityQuery {
        &self.availability
    }

    /// Build the view of the period containing `date`.
    pub fn compose(
        &self,
        granularity: CalendarGranularity,
        date: NaiveDate,
        interviews: &[Interview],
    ) -> ScheduleView {
        let range = display_range(granularity, date);
        let drawn = match granularity {
            CalendarGranularity::Month => month_grid_range(date),
            CalendarGranularity::Week | CalendarGranularity::Day => range,
        };

        let today = self.availability.clock().today();
        let days = drawn.days().map(|day| self.day_view(day, date, today, interviews)).collect();

        let hour_marks = match granularity {
            CalendarGranularity::Day => self
                .availability
                .policy()
                .window_for(date)
                .map(|window| window.hour_marks())
                .unwrap_or_default(),
            CalendarGranularity::Month | CalendarGranularity::Week => Vec::new(),
        };

        ScheduleView {
            granularity,
            label: period_label(granularity, date),
            range,
            focus: date,
            days,
            hour_marks,
        }
    }

    fn day_view(
        &self,
        day: NaiveDate,
        focus: NaiveDate,
        today: NaiveDate,
        interviews: &[Interview],
    ) -> DayView {
        let mut on_day: Vec<Interview> =
            interviews.iter().filter(|interview| interview.scheduled_date == day).cloned().collect();
        // Ok(_) < Err(_) in the key, so parse failures land at the end
        on_day.sort_by_key(|interview| (interview.start_time().map_err(|_| ()), interview.id));

        let available_slot_count = self.availability.available_slots(day, interviews, 0).count();

        DayView {
            date: day,
            is_today: day == today,
            is_past: day < today,
            in_focus_month: day.year() == focus.year() && day.month() == focus.month(),
            interviews: on_day,
            available_slot_count,
            has_available_slots: available_slot_count > 0,
        }
    }
}
