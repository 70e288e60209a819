//! Candidate slot generation
//!
//! Starts at the window's opening time and steps by the window granularity.
//! The last start is the latest one whose slot still ends by closing time.

use chrono::NaiveDate;
use talentdesk_domain::{OfficeHoursPolicy, OfficeWindow, Slot, TimeOfDay};

/// Ordered candidate start times for one day
///
/// Finite and deterministic; clone it to restart from the beginning.
#[derive(Debug, Clone)]
pub struct CandidateStarts {
    next_minutes: u16,
    step: u16,
    remaining: u16,
}

impl CandidateStarts {
    /// A sequence that yields nothing.
    pub const fn empty() -> Self {
        Self { next_minutes: 0, step: 1, remaining: 0 }
    }

    /// Starts inside `window` that leave room for `duration_minutes`.
    ///
    /// A zero duration is treated as one granularity step.
    pub fn within(window: &OfficeWindow, duration_minutes: u16) -> Self {
        let step = window.granularity_minutes();
        let duration = if duration_minutes == 0 { step } else { duration_minutes };
        let length = window.length_minutes();

        if duration > length {
            return Self::empty();
        }

        Self {
            next_minutes: window.opens_at().minutes(),
            step,
            remaining: (length - duration) / step + 1,
        }
    }
}

impl Iterator for CandidateStarts {
    type Item = TimeOfDay;

    fn next(&mut self) -> Option<TimeOfDay> {
        if self.remaining == 0 {
            return None;
        }
        let current = TimeOfDay::from_minutes(self.next_minutes);
        self.remaining -= 1;
        self.next_minutes = self.next_minutes.saturating_add(self.step);
        current
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.remaining);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CandidateStarts {}

/// Produces candidate slots from an office-hours policy
#[derive(Debug, Clone, Copy)]
pub struct SlotGenerator<'a> {
    policy: &'a OfficeHoursPolicy,
}

impl<'a> SlotGenerator<'a> {
    /// Generator reading windows from `policy`.
    pub const fn new(policy: &'a OfficeHoursPolicy) -> Self {
        Self { policy }
    }

    /// Candidate start times for `date`.
    ///
    /// Empty when the policy has no window for the date.
    pub fn generate(&self, date: NaiveDate, minimum_duration: u16) -> CandidateStarts {
        self.policy
            .window_for(date)
            .map_or_else(CandidateStarts::empty, |window| {
                CandidateStarts::within(&window, minimum_duration)
            })
    }

    /// Candidate slots for `date`, each `duration_minutes` long.
    pub fn slots(
        &self,
        date: NaiveDate,
        duration_minutes: u16,
    ) -> impl Iterator<Item = Slot> + Clone {
        let duration = self.effective_duration(date, duration_minutes);
        self.generate(date, duration).map(move |start| Slot::new(date, start, duration))
    }

    /// `duration_minutes`, or the window granularity when zero.
    pub fn effective_duration(&self, date: NaiveDate, duration_minutes: u16) -> u16 {
        if duration_minutes > 0 {
            return duration_minutes;
        }
        self.policy.window_for(date).map_or(0, |window| window.granularity_minutes())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    fn t(hour: u16, minute: u16) -> TimeOfDay {
        TimeOfDay::from_hm(hour, minute).unwrap()
    }

    fn june_10() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    #[test]
    fn test_thirty_minute_slots_fill_the_day() {
        let policy = OfficeHoursPolicy::default();
        let starts: Vec<_> = SlotGenerator::new(&policy).generate(june_10(), 30).collect();

        assert_eq!(starts.len(), 20);
        assert_eq!(starts.first(), Some(&t(8, 0)));
        assert_eq!(starts.last(), Some(&t(17, 30)));
    }

    #[test]
    fn test_hour_slots_stop_at_five() {
        let policy = OfficeHoursPolicy::default();
        let starts: Vec<_> = SlotGenerator::new(&policy).generate(june_10(), 60).collect();

        assert_eq!(starts.len(), 19);
        assert_eq!(starts.last(), Some(&t(17, 0)));
    }

    #[test]
    fn test_duration_off_the_grid() {
        let policy = OfficeHoursPolicy::default();
        let starts: Vec<_> = SlotGenerator::new(&policy).generate(june_10(), 45).collect();

        // 17:00 + 45 = 17:45 fits, 17:30 + 45 does not
        assert_eq!(starts.last(), Some(&t(17, 0)));
        assert!(starts.iter().all(|s| (s.minutes() - 480) % 30 == 0));
    }

    #[test]
    fn test_zero_duration_uses_granularity() {
        let policy = OfficeHoursPolicy::default();
        let generator = SlotGenerator::new(&policy);
        assert_eq!(generator.generate(june_10(), 0).count(), 20);
        assert_eq!(generator.effective_duration(june_10(), 0), 30);
    }

    #[test]
    fn test_duration_longer_than_window_is_empty() {
        let policy = OfficeHoursPolicy::default();
        assert_eq!(SlotGenerator::new(&policy).generate(june_10(), 11 * 60).count(), 0);
        assert_eq!(SlotGenerator::new(&policy).generate(june_10(), 10 * 60).count(), 1);
    }

    #[test]
    fn test_closed_day_is_empty() {
        let policy = OfficeHoursPolicy::default().with_window(Weekday::Tue, None);
        let mut starts = SlotGenerator::new(&policy).generate(june_10(), 30);
        assert_eq!(starts.len(), 0);
        assert_eq!(starts.next(), None);
    }

    #[test]
    fn test_sequence_is_restartable() {
        let policy = OfficeHoursPolicy::default();
        let mut starts = SlotGenerator::new(&policy).generate(june_10(), 60);
        let snapshot = starts.clone();

        starts.by_ref().take(5).for_each(drop);
        assert_eq!(starts.len(), 14);
        assert_eq!(snapshot.count(), 19);
    }

    #[test]
    fn test_slots_carry_date_and_duration() {
        let policy = OfficeHoursPolicy::default();
        let slots: Vec<_> = SlotGenerator::new(&policy).slots(june_10(), 90).collect();

        assert!(slots.iter().all(|s| s.date == june_10() && s.duration_minutes == 90));
        assert_eq!(slots.last().map(|s| s.start), Some(t(16, 30)));
        assert!(slots.iter().all(|s| s.end_minutes() <= 18 * 60));
    }
}
