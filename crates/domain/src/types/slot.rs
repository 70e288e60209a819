//! Bookable slots

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::time_of_day::TimeOfDay;

/// A candidate interview start plus its duration
///
/// Slots produced by the engine always lie fully inside the office window for
/// their date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub date: NaiveDate,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub start: TimeOfDay,
    pub duration_minutes: u16,
}

impl Slot {
    /// Slot of `duration_minutes` starting at `start` on `date`.
    pub const fn new(date: NaiveDate, start: TimeOfDay, duration_minutes: u16) -> Self {
        Self { date, start, duration_minutes }
    }

    /// End offset in minutes since midnight (exclusive).
    ///
    /// Returned as `u32` because a slot may end exactly at midnight.
    pub fn end_minutes(&self) -> u32 {
        u32::from(self.start.minutes()) + u32::from(self.duration_minutes)
    }

    /// End time, or `None` if the slot ends at midnight.
    pub fn end(&self) -> Option<TimeOfDay> {
        self.start.checked_add_minutes(self.duration_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_end() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let slot = Slot::new(date, TimeOfDay::from_hm(17, 0).unwrap(), 60);
        assert_eq!(slot.end(), TimeOfDay::from_hm(18, 0));
        assert_eq!(slot.end_minutes(), 18 * 60);

        let late = Slot::new(date, TimeOfDay::from_hm(23, 30).unwrap(), 30);
        assert_eq!(late.end(), None);
        assert_eq!(late.end_minutes(), 24 * 60);
    }

    #[test]
    fn test_slots_order_chronologically() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let mut slots = vec![
            Slot::new(date, TimeOfDay::from_hm(10, 0).unwrap(), 30),
            Slot::new(date, TimeOfDay::from_hm(8, 30).unwrap(), 30),
        ];
        slots.sort();
        assert_eq!(slots[0].start, TimeOfDay::from_hm(8, 30).unwrap());
    }
}
