//! Conflict detection against booked interviews
//!
//! Two half-open intervals `[s1, s1 + d1)` and `[s2, s2 + d2)` overlap iff
//! `s1 < s2 + d2 && s2 < s1 + d1`. Back-to-back bookings do not conflict.
//!
//! Only interviews on the queried date whose status occupies a slot
//! (scheduled, completed) take part. Interviews whose stored time cannot be
//! parsed are left out of the comparison and reported as
//! [`SkippedInterview`] so the caller can surface them.

use chrono::NaiveDate;
use serde::Serialize;
use talentdesk_domain::{Interview, TimeOfDay, TimeParseError};
use tracing::warn;
use uuid::Uuid;

/// Whether two intervals given as start + duration overlap.
pub fn overlaps(
    candidate_start: TimeOfDay,
    candidate_duration: u16,
    other_start: TimeOfDay,
    other_duration: u16,
) -> bool {
    let (s1, d1) = (u32::from(candidate_start.minutes()), u32::from(candidate_duration));
    let (s2, d2) = (u32::from(other_start.minutes()), u32::from(other_duration));
    s1 < s2 + d2 && s2 < s1 + d1
}

/// An occupied interval on the queried date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookedInterval {
    pub interview_id: Uuid,
    pub start: TimeOfDay,
    pub duration_minutes: u16,
}

impl BookedInterval {
    /// Whether `[start, start + duration)` overlaps this booking.
    pub fn overlaps(&self, start: TimeOfDay, duration_minutes: u16) -> bool {
        overlaps(start, duration_minutes, self.start, self.duration_minutes)
    }
}

/// Why an interview was left out of conflict checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    UnparseableTime(TimeParseError),
    ZeroDuration,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnparseableTime(err) => write!(f, "{err}"),
            Self::ZeroDuration => f.write_str("duration must be positive"),
        }
    }
}

/// Diagnostic for an interview that could not be placed on the timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedInterview {
    pub interview_id: Uuid,
    pub raw_time: String,
    pub reason: SkipReason,
}

/// Occupied intervals for one date
#[derive(Debug, Clone, Default)]
pub struct ConflictDetector {
    date: Option<NaiveDate>,
    booked: Vec<BookedInterval>,
    skipped: Vec<SkippedInterview>,
}

impl ConflictDetector {
    /// Collect the occupied intervals on `date`.
    pub fn for_date(date: NaiveDate, interviews: &[Interview]) -> Self {
        Self::build(date, interviews, None)
    }

    /// Like [`for_date`](Self::for_date) but ignores `interview_id`, so an
    /// interview being rescheduled does not conflict with itself.
    pub fn for_date_excluding(date: NaiveDate, interviews: &[Interview], interview_id: Uuid) -> Self {
        Self::build(date, interviews, Some(interview_id))
    }

    fn build(date: NaiveDate, interviews: &[Interview], exclude: Option<Uuid>) -> Self {
        let mut booked = Vec::new();
        let mut skipped = Vec::new();

        let relevant = interviews.iter().filter(|interview| {
            interview.scheduled_date == date
                && interview.occupies_slot()
                && exclude != Some(interview.id)
        });

        for interview in relevant {
            let reason = match interview.start_time() {
                Ok(_) if interview.duration_minutes == 0 => SkipReason::ZeroDuration,
                Ok(start) => {
                    booked.push(BookedInterval {
                        interview_id: interview.id,
                        start,
                        duration_minutes: interview.duration_minutes,
                    });
                    continue;
                }
                Err(err) => SkipReason::UnparseableTime(err),
            };

            warn!(
                interview_id = %interview.id,
                %date,
                raw_time = %interview.scheduled_time,
                reason = %reason,
                "interview excluded from conflict detection"
            );
            skipped.push(SkippedInterview {
                interview_id: interview.id,
                raw_time: interview.scheduled_time.clone(),
                reason,
            });
        }

        booked.sort_by_key(|interval| interval.start);
        Self { date: Some(date), booked, skipped }
    }

    /// Date the detector was built for; `None` for an empty default.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Whether a candidate overlaps any occupied interval.
    pub fn conflicts_with(&self, start: TimeOfDay, duration_minutes: u16) -> bool {
        self.booked.iter().any(|interval| interval.overlaps(start, duration_minutes))
    }

    /// Occupied intervals overlapping a candidate.
    pub fn conflicting(
        &self,
        start: TimeOfDay,
        duration_minutes: u16,
    ) -> impl Iterator<Item = &BookedInterval> + '_ {
        self.booked.iter().filter(move |interval| interval.overlaps(start, duration_minutes))
    }

    /// Occupied intervals in start order.
    pub fn booked(&self) -> &[BookedInterval] {
        &self.booked
    }

    /// Interviews left out because their time or duration was invalid.
    pub fn skipped(&self) -> &[SkippedInterview] {
        &self.skipped
    }
}
