//! Booking intents and slot reservations

pub mod ports;
pub mod service;

pub use ports::{Reservation, SlotReservationPort};
pub use service::{BookingRequest, BookingService};
