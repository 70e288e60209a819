//! Interview feedback drafts

pub mod ports;
pub mod service;

pub use ports::DraftStore;
pub use service::{draft_key, FeedbackDraftService};
