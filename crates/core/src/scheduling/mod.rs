//! Interview slot scheduling
//!
//! Pure functions of the office-hours policy, the date, and the caller's
//! snapshot of booked interviews. Nothing here performs I/O or holds state
//! between calls, so a query may run concurrently from any number of
//! renders. Availability is advisory: two callers can still race to book
//! the same slot, which the reservation port in [`crate::booking`] resolves.

pub mod availability;
pub mod conflict;
pub mod slots;

pub use availability::{AvailabilityQuery, AvailableSlots, DayAvailability};
pub use conflict::{overlaps, BookedInterval, ConflictDetector, SkipReason, SkippedInterview};
pub use slots::{CandidateStarts, SlotGenerator};
