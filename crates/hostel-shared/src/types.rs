use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::constants::ID_DIGITS;
use crate::error::ParseError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Account role; decides which menu a logged-in user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Resident,
    Warden,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resident => "resident",
            Self::Warden => "warden",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resident" | "student" => Ok(Self::Resident),
            "warden" => Ok(Self::Warden),
            "admin" => Ok(Self::Admin),
            other => Err(ParseError::Role(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Complaint status
// ---------------------------------------------------------------------------

/// Closed status set for complaints.
///
/// The plain console program wrote `"Pending"` for new complaints; it is read
/// back as [`ComplaintStatus::Open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplaintStatus {
    #[serde(alias = "Pending", alias = "pending", alias = "open")]
    Open,
    #[serde(rename = "In Progress", alias = "in_progress", alias = "in progress")]
    InProgress,
    #[serde(alias = "resolved")]
    Resolved,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 3] = [Self::Open, Self::InProgress, Self::Resolved];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }

    /// Whether a complaint in this status may move to `next`.
    ///
    /// Resolved is terminal. Open may go to In Progress or straight to
    /// Resolved; In Progress may only go to Resolved.
    pub fn can_transition_to(&self, next: ComplaintStatus) -> bool {
        matches!(
            (self, next),
            (Self::Open, Self::InProgress)
                | (Self::Open, Self::Resolved)
                | (Self::InProgress, Self::Resolved)
        )
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "open" | "pending" => Ok(Self::Open),
            "in progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            _ => Err(ParseError::Status(s.trim().to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Complaint category
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplaintCategory {
    Maintenance,
    Electrical,
    Plumbing,
    Cleanliness,
    #[serde(rename = "Mess/Food", alias = "Mess", alias = "Food")]
    Mess,
    Internet,
    Security,
    #[default]
    Other,
}

impl ComplaintCategory {
    pub const ALL: [ComplaintCategory; 8] = [
        Self::Maintenance,
        Self::Electrical,
        Self::Plumbing,
        Self::Cleanliness,
        Self::Mess,
        Self::Internet,
        Self::Security,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Maintenance => "Maintenance",
            Self::Electrical => "Electrical",
            Self::Plumbing => "Plumbing",
            Self::Cleanliness => "Cleanliness",
            Self::Mess => "Mess/Food",
            Self::Internet => "Internet",
            Self::Security => "Security",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ComplaintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintCategory {
    type Err = ParseError;

    /// Accepts the category name (case-insensitive) or its 1-based position
    /// in [`ComplaintCategory::ALL`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(|i| Self::ALL.get(i).copied())
                .ok_or_else(|| ParseError::Category(trimmed.to_string()));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "maintenance" => Ok(Self::Maintenance),
            "electrical" | "electricity" => Ok(Self::Electrical),
            "plumbing" | "water" => Ok(Self::Plumbing),
            "cleanliness" | "cleaning" => Ok(Self::Cleanliness),
            "mess" | "food" | "mess/food" => Ok(Self::Mess),
            "internet" | "wifi" => Ok(Self::Internet),
            "security" => Ok(Self::Security),
            "other" => Ok(Self::Other),
            _ => Err(ParseError::Category(trimmed.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Identifier style
// ---------------------------------------------------------------------------

/// How sequential record identifiers are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdStyle {
    /// Prefix plus a zero-padded four digit suffix, e.g. `C0001`.
    #[default]
    Padded,
    /// Bare decimal sequence number, e.g. `1`.
    Plain,
}

impl IdStyle {
    pub fn format(&self, prefix: &str, sequence: usize) -> String {
        match self {
            Self::Padded => format!("{prefix}{sequence:0width$}", width = ID_DIGITS),
            Self::Plain => sequence.to_string(),
        }
    }
}

impl FromStr for IdStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "padded" => Ok(Self::Padded),
            "plain" => Ok(Self::Plain),
            other => Err(ParseError::IdStyle(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Attendance identity matching
// ---------------------------------------------------------------------------

/// Policy for deciding whether two attendance identities are the same person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceMatch {
    #[default]
    Insensitive,
    Sensitive,
}

impl AttendanceMatch {
    pub fn same_identity(&self, a: &str, b: &str) -> bool {
        match self {
            Self::Insensitive => a.trim().to_lowercase() == b.trim().to_lowercase(),
            Self::Sensitive => a.trim() == b.trim(),
        }
    }
}

impl FromStr for AttendanceMatch {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "insensitive" | "case-insensitive" => Ok(Self::Insensitive),
            "sensitive" | "case-sensitive" => Ok(Self::Sensitive),
            other => Err(ParseError::AttendanceMatch(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------

/// The three meals served on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMenu {
    #[serde(alias = "Breakfast")]
    pub breakfast: String,
    #[serde(alias = "Lunch")]
    pub lunch: String,
    #[serde(alias = "Dinner")]
    pub dinner: String,
}

impl DayMenu {
    pub fn new(breakfast: &str, lunch: &str, dinner: &str) -> Self {
        Self {
            breakfast: breakfast.to_string(),
            lunch: lunch.to_string(),
            dinner: dinner.to_string(),
        }
    }
}

/// Full English weekday name, used as the key of the menu document.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a weekday from its name, abbreviation, or 1-based number
/// (1 = Monday).
pub fn parse_weekday(s: &str) -> Result<Weekday, ParseError> {
    let trimmed = s.trim();
    if let Ok(n) = trimmed.parse::<u8>() {
        return match n {
            1..=7 => Ok(WEEK[usize::from(n) - 1]),
            _ => Err(ParseError::Weekday(trimmed.to_string())),
        };
    }
    trimmed
        .parse::<Weekday>()
        .map_err(|_| ParseError::Weekday(trimmed.to_string()))
}

/// Monday-first week order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];
