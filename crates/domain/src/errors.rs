//! Error types used throughout the scheduling engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for TalentDesk
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TalentDeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A slot is already held by another booking.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TalentDeskError {
    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::InvalidInput(_) => "invalid_input",
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
            Self::Storage(_) => "storage",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for TalentDesk operations
pub type Result<T> = std::result::Result<T, TalentDeskError>;

/// Failure to read a wall-clock time string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("time string is empty")]
    Empty,

    #[error("missing minutes in '{0}'")]
    MissingMinutes(String),

    #[error("hour out of range in '{0}'")]
    HourOutOfRange(String),

    #[error("minute out of range in '{0}'")]
    MinuteOutOfRange(String),

    #[error("unrecognised time format '{0}'")]
    Malformed(String),

    /// `12:MM` with no AM/PM marker could be noon or midnight.
    #[error("'{0}' needs an AM/PM marker")]
    Ambiguous(String),
}

impl From<TimeParseError> for TalentDeskError {
    fn from(err: TimeParseError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
