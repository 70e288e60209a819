//! Port interfaces for slot reservations
//!
//! The reservation store is the only place that can settle a race between
//! two bookings; availability queries are computed from a snapshot and may
//! already be stale when a booking arrives.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use talentdesk_domain::{Result, Slot};
use uuid::Uuid;

/// A slot held for an interview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: Uuid,
    pub interview_id: Uuid,
    pub slot: Slot,
    pub reserved_at: DateTime<Utc>,
}

/// Atomic reserve-or-fail store for booked intervals
#[async_trait]
pub trait SlotReservationPort: Send + Sync {
    /// Hold `slot` for `interview_id`.
    ///
    /// Must check and insert in one step: if any held interval on the same
    /// date overlaps `slot`, fail with `TalentDeskError::Conflict` and leave
    /// the store unchanged.
    async fn reserve(&self, interview_id: Uuid, slot: Slot) -> Result<Reservation>;

    /// Drop a reservation. Unknown ids are `TalentDeskError::NotFound`.
    async fn release(&self, reservation_id: Uuid) -> Result<()>;

    /// Reservations held on `date`, in start order.
    async fn reservations_on(&self, date: NaiveDate) -> Result<Vec<Reservation>>;
}
