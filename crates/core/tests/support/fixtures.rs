use std::sync::Arc;

use chrono::NaiveDate;
use talentdesk_core::{AvailabilityQuery, MockClock};
use talentdesk_domain::{Interview, InterviewStatus, OfficeHoursPolicy, TimeOfDay};
use uuid::Uuid;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn t(hour: u16, minute: u16) -> TimeOfDay {
    TimeOfDay::from_hm(hour, minute).unwrap()
}

/// Default policy with the clock pinned to `today`.
pub fn query_at(today: NaiveDate) -> AvailabilityQuery {
    AvailabilityQuery::new(OfficeHoursPolicy::default(), Arc::new(MockClock::at_date(today)))
}

/// Builder for interviews on a fixed date.
pub struct InterviewBuilder {
    interview: Interview,
}

impl InterviewBuilder {
    pub fn on(date: NaiveDate, time: &str) -> Self {
        Self {
            interview: Interview {
                id: Uuid::now_v7(),
                candidate_name: "Katherine Johnson".to_string(),
                scheduled_date: date,
                scheduled_time: time.to_string(),
                duration_minutes: 60,
                status: InterviewStatus::Scheduled,
            },
        }
    }

    pub fn id(mut self, id: u128) -> Self {
        self.interview.id = Uuid::from_u128(id);
        self
    }

    pub fn minutes(mut self, duration: u16) -> Self {
        self.interview.duration_minutes = duration;
        self
    }

    pub fn status(mut self, status: InterviewStatus) -> Self {
        self.interview.status = status;
        self
    }

    pub fn build(self) -> Interview {
        self.interview
    }
}
