//! In-progress interview feedback

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;
use uuid::Uuid;

use crate::impl_domain_status_conversions;

/// Hiring recommendation recorded with feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    StrongHire,
    Hire,
    NoHire,
    StrongNoHire,
}

impl_domain_status_conversions!(Recommendation {
    StrongHire => "strong_hire",
    Hire => "hire",
    NoHire => "no_hire",
    StrongNoHire => "strong_no_hire",
});

/// Feedback form contents saved while the interviewer is still typing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDraft {
    pub interview_id: Uuid,
    /// 1-5 when set.
    pub rating: Option<u8>,
    pub recommendation: Option<Recommendation>,
    #[serde(default)]
    pub strengths: String,
    #[serde(default)]
    pub concerns: String,
    #[serde(default)]
    pub notes: String,
    pub updated_at: DateTime<Utc>,
}

impl FeedbackDraft {
    /// Empty draft for `interview_id`.
    pub fn new(interview_id: Uuid, updated_at: DateTime<Utc>) -> Self {
        Self {
            interview_id,
            rating: None,
            recommendation: None,
            strengths: String::new(),
            concerns: String::new(),
            notes: String::new(),
            updated_at,
        }
    }

    /// True when nothing worth keeping has been entered.
    pub fn is_blank(&self) -> bool {
        self.rating.is_none()
            && self.recommendation.is_none()
            && self.strengths.trim().is_empty()
            && self.concerns.trim().is_empty()
            && self.notes.trim().is_empty()
    }
}
