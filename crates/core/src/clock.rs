//! Clock abstraction
//!
//! "Today" decides which dates still offer bookings, so the engine reads it
//! through [`Clock`] instead of calling `Local::now()` directly. Production
//! code uses [`SystemClock`]; tests pin the date with [`MockClock`].
//!
//! ```
//! use chrono::NaiveDate;
//! use talentdesk_core::clock::{Clock, MockClock};
//!
//! let clock = MockClock::at_date(NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
//! clock.advance_days(1);
//! assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 6, 11).unwrap());
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Days, Local, NaiveDate, NaiveDateTime, Utc};

/// Source of the current local wall-clock time
pub trait Clock: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Current instant in UTC, used for audit timestamps.
    fn now_utc(&self) -> DateTime<Utc>;

    /// Current local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Real system clock in the process's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for deterministic tests
///
/// Clones share the same underlying time.
#[derive(Debug, Clone)]
pub struct MockClock {
    now: Arc<RwLock<NaiveDateTime>>,
}

impl MockClock {
    /// Clock frozen at `now` until moved.
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now: Arc::new(RwLock::new(now)) }
    }

    /// Clock pinned to 09:00 on `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(date.and_hms_opt(9, 0, 0).unwrap_or_else(|| date.and_time(chrono::NaiveTime::MIN)))
    }

    /// Move every clone of this clock to `now`.
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.write().unwrap_or_else(PoisonError::into_inner) = now;
    }

    /// Advance by whole days; a no-op past chrono's range.
    pub fn advance_days(&self, days: u64) {
        let mut now = self.now.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(next) = now.checked_add_days(Days::new(days)) {
            *now = next;
        }
    }
}

impl Clock for MockClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn now_utc(&self) -> DateTime<Utc> {
        self.now().and_utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_today_matches_now() {
        let clock = SystemClock;
        let today = clock.today();
        let now = clock.now();
        // allow for the test straddling midnight
        assert!(now.date() == today || now.date() == today.succ_opt().unwrap());
    }

    #[test]
    fn test_mock_clock_clones_share_time() {
        let clock = MockClock::at_date(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
        let shared = clock.clone();

        clock.advance_days(1);
        assert_eq!(shared.today(), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());

        let later = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().and_hms_opt(17, 30, 0).unwrap();
        shared.set(later);
        assert_eq!(clock.now(), later);
        assert_eq!(clock.now_utc().naive_utc(), later);
    }
}
