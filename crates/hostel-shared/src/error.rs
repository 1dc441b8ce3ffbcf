use thiserror::Error;

/// Failure to read one of the closed vocabularies from user input or
/// configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown role: {0} (expected resident, warden or admin)")]
    Role(String),

    #[error("Unknown complaint status: {0}")]
    Status(String),

    #[error("Unknown complaint category: {0}")]
    Category(String),

    #[error("Unknown ID style: {0} (expected padded or plain)")]
    IdStyle(String),

    #[error("Unknown attendance match policy: {0} (expected insensitive or sensitive)")]
    AttendanceMatch(String),

    #[error("Unknown weekday: {0}")]
    Weekday(String),
}
