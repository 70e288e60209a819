//! Domain types and models
//!
//! Everything the scheduling engine exchanges with its callers: wall-clock
//! times, interviews, slots, the office-hours policy and calendar units.

pub mod calendar;
pub mod feedback;
pub mod interview;
pub mod policy;
pub mod slot;
pub mod time_of_day;

pub use calendar::{CalendarGranularity, DateRange, NavDirection};
pub use feedback::{FeedbackDraft, Recommendation};
pub use interview::{
    BadgeTone, Interview, InterviewAction, InterviewStatus, StatusPresentation,
    STATUS_PRESENTATION,
};
pub use policy::{OfficeHoursPolicy, OfficeWindow};
pub use slot::Slot;
pub use time_of_day::TimeOfDay;
