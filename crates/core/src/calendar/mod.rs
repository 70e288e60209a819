//! Calendar navigation
//!
//! Stateless helpers for moving between month/week/day views. The caller
//! holds `(granularity, date)`; every function here maps it to a new date,
//! a display range or a label.

pub mod navigator;
pub mod period;
pub mod selection;

pub use navigator::{
    days_in_month, end_of_month, grid_week_number, iso_week_number, iso_weekday,
    iso_weeks_in_year, start_of_month, week_grid_start, weeks_in_month, with_day, with_month,
    with_week, with_year,
};
pub use period::{display_range, month_grid_range, period_label, shift, today};
pub use selection::CalendarSelection;
