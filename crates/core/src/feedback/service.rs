//! Feedback draft auto-save

use std::sync::Arc;

use talentdesk_domain::constants::FEEDBACK_DRAFT_KEY_PREFIX;
use talentdesk_domain::{FeedbackDraft, Result, TalentDeskError};
use tracing::{debug, warn};
use uuid::Uuid;

use super::ports::DraftStore;
use crate::clock::Clock;

/// Storage key for the draft of `interview_id`.
pub fn draft_key(interview_id: Uuid) -> String {
    format!("{FEEDBACK_DRAFT_KEY_PREFIX}{interview_id}")
}

/// Saves, restores and discards feedback drafts through a [`DraftStore`]
pub struct FeedbackDraftService {
    store: Arc<dyn DraftStore>,
    clock: Arc<dyn Clock>,
}

impl FeedbackDraftService {
    /// Service persisting drafts to `store`, stamped by `clock`.
    pub fn new(store: Arc<dyn DraftStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Persist `draft`, stamping `updated_at` with the clock.
    ///
    /// A blank draft removes any stored copy instead of saving an empty one.
    /// Returns the draft as stored, or `None` if it was cleared.
    pub async fn save_draft(&self, mut draft: FeedbackDraft) -> Result<Option<FeedbackDraft>> {
        if let Some(rating) = draft.rating.filter(|rating| !(1..=5).contains(rating)) {
            return Err(TalentDeskError::InvalidInput(format!("rating must be 1-5, got {rating}")));
        }

        let key = draft_key(draft.interview_id);
        if draft.is_blank() {
            self.store.remove(&key).await?;
            debug!(interview_id = %draft.interview_id, "blank feedback draft cleared");
            return Ok(None);
        }

        draft.updated_at = self.clock.now_utc();
        let payload = serde_json::to_string(&draft)
            .map_err(|err| TalentDeskError::Internal(format!("serialize draft: {err}")))?;
        self.store.save(&key, payload).await?;
        debug!(interview_id = %draft.interview_id, "feedback draft saved");
        Ok(Some(draft))
    }

    /// Restore the draft for `interview_id`.
    ///
    /// A stored value that no longer parses is logged and treated as absent
    /// so the form opens empty rather than failing.
    pub async fn load_draft(&self, interview_id: Uuid) -> Result<Option<FeedbackDraft>> {
        let Some(raw) = self.store.load(&draft_key(interview_id)).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<FeedbackDraft>(&raw) {
            Ok(draft) if draft.interview_id == interview_id => Ok(Some(draft)),
            Ok(draft) => {
                warn!(
                    %interview_id,
                    stored_for = %draft.interview_id,
                    "feedback draft stored under the wrong key, ignoring"
                );
                Ok(None)
            }
            Err(err) => {
                warn!(%interview_id, error = %err, "corrupt feedback draft, ignoring");
                Ok(None)
            }
        }
    }

    /// Drop the draft after submit or cancel; returns whether one existed.
    pub async fn discard_draft(&self, interview_id: Uuid) -> Result<bool> {
        self.store.remove(&draft_key(interview_id)).await
    }
}
