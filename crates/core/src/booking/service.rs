//! Booking service - turns a booking intent into a held reservation

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use talentdesk_domain::{Interview, Result, Slot, TalentDeskError, TimeOfDay};
use tracing::{info, warn};
use uuid::Uuid;

use super::ports::{Reservation, SlotReservationPort};
use crate::scheduling::{AvailabilityQuery, ConflictDetector};

/// A request to hold one slot for an interview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub interview_id: Uuid,
    pub date: NaiveDate,
    pub start: TimeOfDay,
    pub duration_minutes: u16,
}

impl BookingRequest {
    /// The slot this request asks to hold.
    pub const fn slot(&self) -> Slot {
        Slot::new(self.date, self.start, self.duration_minutes)
    }
}

/// Booking service
pub struct BookingService {
    availability: AvailabilityQuery,
    reservations: Arc<dyn SlotReservationPort>,
}

impl BookingService {
    /// Create a new booking service
    pub fn new(availability: AvailabilityQuery, reservations: Arc<dyn SlotReservationPort>) -> Self {
        Self { availability, reservations }
    }

    /// Validate `request` and hold its slot.
    ///
    /// `existing` is the caller's snapshot of interviews; it gives an early
    /// `Conflict` without a round trip, while the reservation port settles
    /// races between concurrent callers. The interview being booked is
    /// ignored in the snapshot so rescheduling onto an overlapping time works.
    pub async fn book(&self, request: BookingRequest, existing: &[Interview]) -> Result<Reservation> {
        self.validate(&request)?;

        let detector =
            ConflictDetector::for_date_excluding(request.date, existing, request.interview_id);
        let blocking: Vec<String> = detector
            .conflicting(request.start, request.duration_minutes)
            .map(|interval| interval.interview_id.to_string())
            .collect();
        if !blocking.is_empty() {
            warn!(
                interview_id = %request.interview_id,
                date = %request.date,
                start = %request.start,
                blocking = ?blocking,
                "booking rejected by existing interviews"
            );
            return Err(TalentDeskError::Conflict(format!(
                "{} {} overlaps interview(s) {}",
                request.date,
                request.start,
                blocking.join(", ")
            )));
        }

        match self.reservations.reserve(request.interview_id, request.slot()).await {
            Ok(reservation) => {
                info!(
                    reservation_id = %reservation.id,
                    interview_id = %request.interview_id,
                    date = %request.date,
                    start = %request.start,
                    duration_minutes = request.duration_minutes,
                    "slot reserved"
                );
                Ok(reservation)
            }
            Err(err) => {
                warn!(
                    interview_id = %request.interview_id,
                    date = %request.date,
                    start = %request.start,
                    error = %err,
                    "slot reservation failed"
                );
                Err(err)
            }
        }
    }

    /// Release a reservation made by [`book`](Self::book).
    pub async fn cancel(&self, reservation_id: Uuid) -> Result<()> {
        self.reservations.release(reservation_id).await?;
        info!(%reservation_id, "reservation released");
        Ok(())
    }

    /// Reservations currently held on `date`.
    pub async fn reservations_on(&self, date: NaiveDate) -> Result<Vec<Reservation>> {
        self.reservations.reservations_on(date).await
    }

    fn validate(&self, request: &BookingRequest) -> Result<()> {
        let policy = self.availability.policy();

        if request.duration_minutes == 0 {
            return Err(TalentDeskError::InvalidInput("duration must be positive".to_string()));
        }
        if !policy.accepts_duration(request.duration_minutes) {
            return Err(TalentDeskError::InvalidInput(format!(
                "duration {} min is not one of {:?}",
                request.duration_minutes,
                policy.duration_options()
            )));
        }
        if self.availability.is_past(request.date) {
            return Err(TalentDeskError::InvalidInput(format!(
                "{} is in the past",
                request.date
            )));
        }

        let window = policy.window_for(request.date).ok_or_else(|| {
            TalentDeskError::InvalidInput(format!("office is closed on {}", request.date))
        })?;
        if !window.is_aligned(request.start)
            || !window.contains(request.start, request.duration_minutes)
        {
            return Err(TalentDeskError::InvalidInput(format!(
                "{} for {} min is not a bookable slot ({}-{}, every {} min)",
                request.start,
                request.duration_minutes,
                window.opens_at(),
                window.closes_at(),
                window.granularity_minutes()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{Utc, Weekday};
    use talentdesk_domain::{InterviewStatus, OfficeHoursPolicy};

    use super::*;
    use crate::clock::MockClock;

    #[derive(Default)]
    struct RecordingReservations {
        held: Mutex<Vec<Reservation>>,
    }

    #[async_trait]
    impl SlotReservationPort for RecordingReservations {
        async fn reserve(&self, interview_id: Uuid, slot: Slot) -> Result<Reservation> {
            let reservation =
                Reservation { id: Uuid::now_v7(), interview_id, slot, reserved_at: Utc::now() };
            self.held.lock().unwrap().push(reservation.clone());
            Ok(reservation)
        }

        async fn release(&self, reservation_id: Uuid) -> Result<()> {
            let mut held = self.held.lock().unwrap();
            let before = held.len();
            held.retain(|r| r.id != reservation_id);
            if held.len() == before {
                return Err(TalentDeskError::NotFound(reservation_id.to_string()));
            }
            Ok(())
        }

        async fn reservations_on(&self, date: NaiveDate) -> Result<Vec<Reservation>> {
            Ok(self.held.lock().unwrap().iter().filter(|r| r.slot.date == date).cloned().collect())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn t(hour: u16, minute: u16) -> TimeOfDay {
        TimeOfDay::from_hm(hour, minute).unwrap()
    }

    fn service(policy: OfficeHoursPolicy) -> (BookingService, Arc<RecordingReservations>) {
        let port = Arc::new(RecordingReservations::default());
        let availability =
            AvailabilityQuery::new(policy, Arc::new(MockClock::at_date(date(2025, 6, 1))));
        (BookingService::new(availability, port.clone()), port)
    }

    fn request(start: TimeOfDay, duration: u16) -> BookingRequest {
        BookingRequest {
            interview_id: Uuid::from_u128(42),
            date: date(2025, 6, 10),
            start,
            duration_minutes: duration,
        }
    }

    #[tokio::test]
    async fn test_books_free_slot() {
        let (service, port) = service(OfficeHoursPolicy::default());
        let reservation = service.book(request(t(9, 0), 60), &[]).await.unwrap();

        assert_eq!(reservation.slot, Slot::new(date(2025, 6, 10), t(9, 0), 60));
        assert_eq!(port.held.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_rejects_invalid_requests() {
        let (service, port) = service(OfficeHoursPolicy::default());

        for bad in [request(t(9, 0), 0), request(t(9, 0), 20), request(t(9, 15), 30), request(t(17, 30), 60)] {
            let err = service.book(bad, &[]).await.unwrap_err();
            assert_eq!(err.label(), "invalid_input", "{bad:?}");
        }

        let mut past = request(t(9, 0), 30);
        past.date = date(2025, 5, 31);
        assert!(matches!(service.book(past, &[]).await, Err(TalentDeskError::InvalidInput(_))));

        assert!(port.held.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_closed_day() {
        let (service, _) = service(OfficeHoursPolicy::default().with_window(Weekday::Tue, None));
        let err = service.book(request(t(9, 0), 30), &[]).await.unwrap_err();
        assert!(matches!(err, TalentDeskError::InvalidInput(msg) if msg.contains("closed")));
    }

    #[tokio::test]
    async fn test_snapshot_conflict_and_self_exclusion() {
        let (service, port) = service(OfficeHoursPolicy::default());
        let mut existing = Interview {
            id: Uuid::from_u128(7),
            candidate_name: "Ada Lovelace".to_string(),
            scheduled_date: date(2025, 6, 10),
            scheduled_time: "10:00 AM".to_string(),
            duration_minutes: 60,
            status: InterviewStatus::Scheduled,
        };

        let err = service.book(request(t(9, 30), 60), std::slice::from_ref(&existing)).await;
        assert!(matches!(err, Err(TalentDeskError::Conflict(_))));
        assert!(port.held.lock().unwrap().is_empty());

        // rescheduling the same interview onto an overlapping time
        existing.id = Uuid::from_u128(42);
        assert!(service.book(request(t(9, 30), 60), &[existing]).await.is_ok());
    }

    #[tokio::test]
    async fn test_cancel_releases() {
        let (service, port) = service(OfficeHoursPolicy::default());
        let reservation = service.book(request(t(9, 0), 30), &[]).await.unwrap();

        service.cancel(reservation.id).await.unwrap();
        assert!(port.held.lock().unwrap().is_empty());
        assert!(matches!(
            service.cancel(reservation.id).await,
            Err(TalentDeskError::NotFound(_))
        ));
    }
}
