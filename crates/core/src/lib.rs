//! # TalentDesk Core
//!
//! Scheduling logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - Slot generation, conflict detection and availability queries
//! - Calendar navigation (ISO weeks, safe field changes, period labels)
//! - The schedule view composer consumed by month/week/day views
//! - Port interfaces (traits) for reservations, draft storage and time
//! - Booking and feedback-draft services
//!
//! ## Architecture Principles
//! - Only depends on `talentdesk-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod booking;
pub mod calendar;
pub mod clock;
pub mod feedback;
pub mod schedule_view;
pub mod scheduling;

pub use booking::{BookingRequest, BookingService, Reservation, SlotReservationPort};
pub use calendar::CalendarSelection;
pub use clock::{Clock, MockClock, SystemClock};
pub use feedback::{DraftStore, FeedbackDraftService};
pub use schedule_view::{DayView, ScheduleView, ScheduleViewComposer};
pub use scheduling::{
    AvailabilityQuery, AvailableSlots, ConflictDetector, DayAvailability, SkippedInterview,
    SlotGenerator,
};
