//! In-process reservation store
//!
//! One `parking_lot::Mutex` guards every date, so the overlap check and the
//! insert happen in the same critical section. That is enough to serialise
//! bookings inside one process; a multi-process deployment needs a store
//! with its own locking behind the same port.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use talentdesk_core::scheduling::overlaps;
use talentdesk_core::{Clock, Reservation, SlotReservationPort, SystemClock};
use talentdesk_domain::{Result, Slot, TalentDeskError};
use tracing::debug;
use uuid::Uuid;

#[derive(Default)]
struct Ledger {
    by_date: BTreeMap<NaiveDate, Vec<Reservation>>,
    dates: HashMap<Uuid, NaiveDate>,
}

/// Reference [`SlotReservationPort`] holding reservations in memory
#[derive(Clone)]
pub struct InMemorySlotReservations {
    ledger: Arc<Mutex<Ledger>>,
    clock: Arc<dyn Clock>,
}

impl InMemorySlotReservations {
    /// Ledger stamped with the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Stamp `reserved_at` from `clock` instead of the system time.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { ledger: Arc::new(Mutex::new(Ledger::default())), clock }
    }

    /// Number of reservations currently held.
    pub fn len(&self) -> usize {
        self.ledger.lock().dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemorySlotReservations {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemorySlotReservations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySlotReservations").field("held", &self.len()).finish()
    }
}

#[async_trait]
impl SlotReservationPort for InMemorySlotReservations {
    async fn reserve(&self, interview_id: Uuid, slot: Slot) -> Result<Reservation> {
        if slot.duration_minutes == 0 {
            return Err(TalentDeskError::InvalidInput("duration must be positive".to_string()));
        }

        let mut ledger = self.ledger.lock();
        let day = ledger.by_date.entry(slot.date).or_default();

        if let Some(held) = day.iter().find(|held| {
            overlaps(slot.start, slot.duration_minutes, held.slot.start, held.slot.duration_minutes)
        }) {
            return Err(TalentDeskError::Conflict(format!(
                "{} {} overlaps reservation {} for interview {}",
                slot.date, slot.start, held.id, held.interview_id
            )));
        }

        let reservation = Reservation {
            id: Uuid::now_v7(),
            interview_id,
            slot,
            reserved_at: self.clock.now_utc(),
        };
        let position = day.partition_point(|held| held.slot.start <= slot.start);
        day.insert(position, reservation.clone());
        ledger.dates.insert(reservation.id, slot.date);

        debug!(reservation_id = %reservation.id, date = %slot.date, start = %slot.start, "reservation stored");
        Ok(reservation)
    }

    async fn release(&self, reservation_id: Uuid) -> Result<()> {
        let mut ledger = self.ledger.lock();
        let date = ledger
            .dates
            .remove(&reservation_id)
            .ok_or_else(|| TalentDeskError::NotFound(format!("reservation {reservation_id}")))?;

        if let Some(day) = ledger.by_date.get_mut(&date) {
            day.retain(|held| held.id != reservation_id);
            if day.is_empty() {
                ledger.by_date.remove(&date);
            }
        }
        Ok(())
    }

    async fn reservations_on(&self, date: NaiveDate) -> Result<Vec<Reservation>> {
        Ok(self.ledger.lock().by_date.get(&date).cloned().unwrap_or_default())
    }
}
