//! Interview records and their status presentation
//!
//! Interviews are owned by the persistence layer and handed to the engine by
//! reference for each query. The engine never mutates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;
use uuid::Uuid;

use super::time_of_day::TimeOfDay;
use crate::errors::TimeParseError;
use crate::impl_domain_status_conversions;

/// Lifecycle state of a scheduled interview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl_domain_status_conversions!(InterviewStatus {
    Scheduled => "scheduled",
    Completed => "completed",
    Cancelled => "cancelled" | "canceled",
    NoShow => "no_show" | "no-show" | "noshow",
});

impl InterviewStatus {
    /// Whether an interview in this state blocks its slot for new bookings.
    ///
    /// Cancelled and no-show interviews stay visible in the calendar but
    /// release their slot so it can be rebooked.
    pub const fn occupies_slot(self) -> bool {
        matches!(self, Self::Scheduled | Self::Completed)
    }

    /// Presentation policy for this status.
    pub fn presentation(self) -> &'static StatusPresentation {
        match self {
            Self::Scheduled => &STATUS_PRESENTATION[0],
            Self::Completed => &STATUS_PRESENTATION[1],
            Self::Cancelled => &STATUS_PRESENTATION[2],
            Self::NoShow => &STATUS_PRESENTATION[3],
        }
    }
}

/// A booked interview as stored by the persistence layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: Uuid,
    pub candidate_name: String,
    pub scheduled_date: NaiveDate,
    /// Raw wall-clock string, `"10:00 AM"` or `"14:30"`.
    pub scheduled_time: String,
    pub duration_minutes: u16,
    pub status: InterviewStatus,
}

impl Interview {
    /// Parsed start time.
    ///
    /// # Errors
    /// Returns the parse failure for malformed `scheduled_time` values.
    pub fn start_time(&self) -> Result<TimeOfDay, TimeParseError> {
        TimeOfDay::parse(&self.scheduled_time)
    }

    /// Whether this interview blocks its slot for new bookings.
    pub fn occupies_slot(&self) -> bool {
        self.status.occupies_slot()
    }
}

/// Badge colour family for a status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Info,
    Success,
    Muted,
    Warning,
}

/// Actions the UI may offer for an interview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum InterviewAction {
    ViewDetails,
    Edit,
    MarkCompleted,
    MarkNoShow,
    Cancel,
    SubmitFeedback,
    Reschedule,
}

/// Presentation entry for one status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusPresentation {
    pub status: InterviewStatus,
    pub label: &'static str,
    pub tone: BadgeTone,
    pub actions: &'static [InterviewAction],
}

impl StatusPresentation {
    /// Whether `action` is offered for this status.
    pub fn allows(&self, action: InterviewAction) -> bool {
        self.actions.contains(&action)
    }
}

/// Single status -> presentation table shared by month, week and day views.
///
/// Ordered like [`InterviewStatus::ALL`].
pub static STATUS_PRESENTATION: [StatusPresentation; 4] = [
    StatusPresentation {
        status: InterviewStatus::Scheduled,
        label: "Scheduled",
        tone: BadgeTone::Info,
        actions: &[
            InterviewAction::ViewDetails,
            InterviewAction::Edit,
            InterviewAction::MarkCompleted,
            InterviewAction::MarkNoShow,
            InterviewAction::Cancel,
        ],
    },
    StatusPresentation {
        status: InterviewStatus::Completed,
        label: "Completed",
        tone: BadgeTone::Success,
        actions: &[InterviewAction::ViewDetails, InterviewAction::SubmitFeedback],
    },
    StatusPresentation {
        status: InterviewStatus::Cancelled,
        label: "Cancelled",
        tone: BadgeTone::Muted,
        actions: &[InterviewAction::ViewDetails, InterviewAction::Reschedule],
    },
    StatusPresentation {
        status: InterviewStatus::NoShow,
        label: "No Show",
        tone: BadgeTone::Warning,
        actions: &[InterviewAction::ViewDetails, InterviewAction::Reschedule],
    },
];
