//! Availability queries
//!
//! Combines [`SlotGenerator`] and [`ConflictDetector`] to answer "which slots
//! are still free on this date" and "is anything free at all". Past dates
//! never offer slots.

use std::sync::Arc;

use chrono::NaiveDate;
use talentdesk_domain::{Interview, OfficeHoursPolicy, Slot};
use tracing::debug;

use super::conflict::{ConflictDetector, SkippedInterview};
use super::slots::{CandidateStarts, SlotGenerator};
use crate::clock::Clock;

/// Lazy, restartable sequence of free slots for one date
#[derive(Debug, Clone)]
pub struct AvailableSlots {
    date: NaiveDate,
    duration_minutes: u16,
    starts: CandidateStarts,
    detector: ConflictDetector,
}

impl AvailableSlots {
    /// Diagnostics for interviews that could not be checked.
    pub fn skipped(&self) -> &[SkippedInterview] {
        self.detector.skipped()
    }
}

impl Iterator for AvailableSlots {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        let duration = self.duration_minutes;
        let detector = &self.detector;
        self.starts
            .find(|start| !detector.conflicts_with(*start, duration))
            .map(|start| Slot::new(self.date, start, duration))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.starts.size_hint().1)
    }
}

/// Free/busy summary for one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub free_slots: Vec<Slot>,
    pub skipped: Vec<SkippedInterview>,
}

/// Answers availability questions against an office-hours policy
#[derive(Clone)]
pub struct AvailabilityQuery {
    policy: OfficeHoursPolicy,
    clock: Arc<dyn Clock>,
}

impl AvailabilityQuery {
    /// Query against `policy`; `clock` decides which dates are past.
    pub fn new(policy: OfficeHoursPolicy, clock: Arc<dyn Clock>) -> Self {
        Self { policy, clock }
    }

    /// The office-hours policy slots are generated from.
    pub fn policy(&self) -> &OfficeHoursPolicy {
        &self.policy
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Whether `date` is before the clock's today.
    pub fn is_past(&self, date: NaiveDate) -> bool {
        date < self.clock.today()
    }

    /// Lazy free-slot sequence; `duration_minutes == 0` uses the granularity.
    pub fn available_slots(
        &self,
        date: NaiveDate,
        interviews: &[Interview],
        duration_minutes: u16,
    ) -> AvailableSlots {
        let generator = SlotGenerator::new(&self.policy);
        let duration = generator.effective_duration(date, duration_minutes);
        let starts = if self.is_past(date) {
            CandidateStarts::empty()
        } else {
            generator.generate(date, duration)
        };

        AvailableSlots {
            date,
            duration_minutes: duration,
            starts,
            detector: ConflictDetector::for_date(date, interviews),
        }
    }

    /// Whether at least one default-length slot is free on `date`.
    pub fn has_available_slots(&self, date: NaiveDate, interviews: &[Interview]) -> bool {
        self.has_available_slots_for_duration(date, interviews, 0)
    }

    /// Whether a `duration_minutes` slot is free on `date`; zero means one granularity step.
    pub fn has_available_slots_for_duration(
        &self,
        date: NaiveDate,
        interviews: &[Interview],
        duration_minutes: u16,
    ) -> bool {
        self.available_slots(date, interviews, duration_minutes).next().is_some()
    }

    /// Every free default-length slot on `date`, in chronological order.
    pub fn list_available_slots(&self, date: NaiveDate, interviews: &[Interview]) -> Vec<Slot> {
        self.list_available_slots_for_duration(date, interviews, 0)
    }

    /// Every free `duration_minutes` slot on `date`, in chronological order.
    pub fn list_available_slots_for_duration(
        &self,
        date: NaiveDate,
        interviews: &[Interview],
        duration_minutes: u16,
    ) -> Vec<Slot> {
        self.day_availability(date, interviews, duration_minutes).free_slots
    }

    /// Free slots plus the diagnostics gathered while computing them.
    pub fn day_availability(
        &self,
        date: NaiveDate,
        interviews: &[Interview],
        duration_minutes: u16,
    ) -> DayAvailability {
        let mut slots = self.available_slots(date, interviews, duration_minutes);
        let free_slots: Vec<Slot> = slots.by_ref().collect();
        let skipped = slots.skipped().to_vec();

        debug!(
            %date,
            duration_minutes = slots.duration_minutes,
            free = free_slots.len(),
            skipped = skipped.len(),
            "computed day availability"
        );

        DayAvailability { date, free_slots, skipped }
    }
}

impl std::fmt::Debug for AvailabilityQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvailabilityQuery")
            .field("policy", &self.policy)
            .field("today", &self.clock.today())
            .finish()
    }
}
