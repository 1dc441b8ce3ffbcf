use chrono::NaiveDate;
use hostel_shared::types::ComplaintStatus;
use thiserror::Error;

use crate::store::Collection;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to determine a platform data directory.
    #[error("Could not determine application data directory")]
    NoDataDir,

    /// Writing a document failed (permission denied, disk full, ...).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be converted to or from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A raw record lacks a key its typed view requires.
    #[error("{collection} record is missing field `{field}`")]
    MissingField {
        collection: Collection,
        field: &'static str,
    },

    /// User input failed a presence or range check.
    #[error("{0}")]
    Validation(String),

    /// Lookup by key found nothing.
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    /// A record with the same unique key already exists.
    #[error("{kind} already exists: {key}")]
    Duplicate { kind: &'static str, key: String },

    #[error("Attendance already marked for {username} on {date}")]
    AlreadyMarked { username: String, date: NaiveDate },

    #[error("Room {room_number} is full ({occupied}/{capacity})")]
    RoomUnavailable {
        room_number: String,
        occupied: u32,
        capacity: u32,
    },

    #[error("Complaint {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: ComplaintStatus,
        to: ComplaintStatus,
    },
}

impl StoreError {
    pub(crate) fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub(crate) fn blank(field: &str) -> Self {
        Self::Validation(format!("{field} cannot be empty"))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Reject blank (empty or whitespace-only) input.
pub(crate) fn require(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::blank(field));
    }
    Ok(trimmed.to_string())
}
