//! In-memory mocks for the core ports.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use talentdesk_core::{DraftStore, Reservation, SlotReservationPort};
use talentdesk_domain::{Result as DomainResult, Slot, TalentDeskError};
use uuid::Uuid;

/// In-memory mock for `SlotReservationPort`.
///
/// Rejects overlapping intervals on the same date, mirroring the contract
/// every real adapter has to honour.
#[derive(Default, Clone)]
pub struct MockReservations {
    held: Arc<Mutex<Vec<Reservation>>>,
}

impl MockReservations {
    pub fn held(&self) -> Vec<Reservation> {
        self.held.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlotReservationPort for MockReservations {
    async fn reserve(&self, interview_id: Uuid, slot: Slot) -> DomainResult<Reservation> {
        let mut held = self.held.lock().unwrap();
        let clash = held.iter().any(|r| {
            r.slot.date == slot.date
                && u32::from(r.slot.start.minutes()) < slot.end_minutes()
                && u32::from(slot.start.minutes()) < r.slot.end_minutes()
        });
        if clash {
            return Err(TalentDeskError::Conflict(format!("{} {} is taken", slot.date, slot.start)));
        }
        let reservation = Reservation { id: Uuid::now_v7(), interview_id, slot, reserved_at: Utc::now() };
        held.push(reservation.clone());
        Ok(reservation)
    }

    async fn release(&self, reservation_id: Uuid) -> DomainResult<()> {
        let mut held = self.held.lock().unwrap();
        let index = held
            .iter()
            .position(|r| r.id == reservation_id)
            .ok_or_else(|| TalentDeskError::NotFound(reservation_id.to_string()))?;
        held.remove(index);
        Ok(())
    }

    async fn reservations_on(&self, date: NaiveDate) -> DomainResult<Vec<Reservation>> {
        let mut on_date: Vec<_> =
            self.held.lock().unwrap().iter().filter(|r| r.slot.date == date).cloned().collect();
        on_date.sort_by_key(|r| r.slot.start);
        Ok(on_date)
    }
}

/// In-memory mock for `DraftStore`.
#[derive(Default, Clone)]
pub struct MockDraftStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MockDraftStore {
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries.lock().unwrap().insert(key.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl DraftStore for MockDraftStore {
    async fn load(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn save(&self, key: &str, value: String) -> DomainResult<()> {
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> DomainResult<bool> {
        Ok(self.entries.lock().unwrap().remove(key).is_some())
    }
}
