//! Domain records persisted in the JSON collections.
//!
//! Every record is a typed view over a flat JSON object ([`RawRecord`]).
//! Field names follow the role-based schema (`username`, `room_number`,
//! `complaint_id`); the aliases accept documents written by the plain console
//! program (`name`, `room`, `id`, ...).

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use hostel_shared::types::{ComplaintCategory, ComplaintStatus, Role};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, StoreError};
use crate::store::Collection;

/// One untyped entry of a collection document.
pub type RawRecord = serde_json::Map<String, Value>;

/// Conversion between a typed record and its raw mapping.
pub trait Record: Serialize + DeserializeOwned {
    /// Collection this record lives in.
    const COLLECTION: Collection;

    /// Required fields. Each entry lists the accepted key names, canonical
    /// name first.
    const REQUIRED: &'static [&'static [&'static str]];

    /// `(canonical, alias)` key pairs accepted on read.
    const ALIASES: &'static [(&'static str, &'static str)] = &[];

    /// Rewrite alias keys to their canonical name. When both spellings are
    /// present the canonical value wins unless it is null.
    fn normalize(raw: &RawRecord) -> RawRecord {
        let mut map = raw.clone();
        for (canonical, alias) in Self::ALIASES {
            let Some(value) = map.remove(*alias) else {
                continue;
            };
            if map.get(*canonical).map_or(true, Value::is_null) {
                map.insert((*canonical).to_string(), value);
            }
        }
        map
    }

    /// Build the typed view, failing with [`StoreError::MissingField`] when a
    /// required key is absent or null.
    fn from_raw(raw: &RawRecord) -> Result<Self> {
        for keys in Self::REQUIRED {
            let present = keys
                .iter()
                .any(|k| raw.get(*k).is_some_and(|v| !v.is_null()));
            if !present {
                return Err(StoreError::MissingField {
                    collection: Self::COLLECTION,
                    field: keys.first().copied().unwrap_or("?"),
                });
            }
        }
        Ok(serde_json::from_value(Value::Object(Self::normalize(raw)))?)
    }

    /// Reduce the record to its raw mapping. Never fails.
    fn to_raw(&self) -> RawRecord {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => RawRecord::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A hostel account. The primary key is `username`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub username: String,
    /// Stored and compared as plaintext.
    pub password: String,
    pub role: Role,
    #[serde(
        default,
        deserialize_with = "serde_helpers::opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub room_number: Option<String>,
    #[serde(default)]
    pub full_name: String,
}

impl Record for User {
    const COLLECTION: Collection = Collection::Users;
    const REQUIRED: &'static [&'static [&'static str]] =
        &[&["username"], &["password"], &["role"]];
    const ALIASES: &'static [(&'static str, &'static str)] =
        &[("room_number", "room"), ("full_name", "name")];
}

// ---------------------------------------------------------------------------
// Complaint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Complaint {
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub complaint_id: String,
    /// Owner of the complaint.
    pub username: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub room_number: Option<String>,
    #[serde(default)]
    pub category: ComplaintCategory,
    pub description: String,
    pub status: ComplaintStatus,
    #[serde(with = "serde_helpers::timestamp")]
    pub submitted_date: NaiveDateTime,
    #[serde(
        default,
        with = "serde_helpers::opt_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub resolved_date: Option<NaiveDateTime>,
}

impl Record for Complaint {
    const COLLECTION: Collection = Collection::Complaints;
    const REQUIRED: &'static [&'static [&'static str]] = &[
        &["complaint_id", "id"],
        &["username", "name"],
        &["description", "complaint"],
        &["status"],
        &["submitted_date", "date"],
    ];
    const ALIASES: &'static [(&'static str, &'static str)] = &[
        ("complaint_id", "id"),
        ("username", "name"),
        ("room_number", "room"),
        ("description", "complaint"),
        ("submitted_date", "date"),
    ];
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    /// Older documents carry no id; it is backfilled from the position when
    /// the collection is listed.
    #[serde(default, deserialize_with = "serde_helpers::string_or_number")]
    pub event_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// As written. Events added here always store `YYYY-MM-DD`; older
    /// documents may hold free text. See [`Event::day`].
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(with = "serde_helpers::timestamp")]
    pub created_at: NaiveDateTime,
}

impl Record for Event {
    const COLLECTION: Collection = Collection::Events;
    const REQUIRED: &'static [&'static [&'static str]] = &[
        &["title", "name"],
        &["date"],
        &["created_at", "added_on"],
    ];
    const ALIASES: &'static [(&'static str, &'static str)] = &[
        ("event_id", "id"),
        ("title", "name"),
        ("description", "details"),
        ("created_at", "added_on"),
    ];
}

/// Formats tried, in order, when reading an event date.
const EVENT_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%d %b %Y",
    "%d %B %Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
];

impl Event {
    /// Calendar day of the event, if the stored date can be read.
    pub fn day(&self) -> Option<NaiveDate> {
        let date = self.date.trim();
        EVENT_DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(date, fmt).ok())
    }

    /// Dated today or later. Events whose date cannot be read count as
    /// upcoming.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.day().map_or(true, |day| day >= today)
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Room {
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub room_number: String,
    pub capacity: u32,
    #[serde(default)]
    pub occupied: u32,
    /// Usernames, in allocation order, without duplicates.
    #[serde(default)]
    pub residents: Vec<String>,
}

impl Room {
    pub fn is_available(&self) -> bool {
        self.occupied < self.capacity
    }

    pub fn free_beds(&self) -> u32 {
        self.capacity.saturating_sub(self.occupied)
    }
}

impl Record for Room {
    const COLLECTION: Collection = Collection::Rooms;
    const REQUIRED: &'static [&'static [&'static str]] =
        &[&["room_number", "room"], &["capacity"]];
    const ALIASES: &'static [(&'static str, &'static str)] = &[("room_number", "room")];
}

// ---------------------------------------------------------------------------
// Attendance
// ---------------------------------------------------------------------------

/// One daily presence mark.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub username: String,
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub room_number: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl Record for AttendanceRecord {
    const COLLECTION: Collection = Collection::Attendance;
    const REQUIRED: &'static [&'static [&'static str]] = &[
        &["username", "name"],
        &["room_number", "room"],
        &["date"],
        &["time"],
    ];
    const ALIASES: &'static [(&'static str, &'static str)] =
        &[("username", "name"), ("room_number", "room")];
}

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackRecord {
    pub username: String,
    #[serde(default)]
    pub category: String,
    pub feedback: String,
    /// 1 to 5, checked on submission.
    pub rating: u8,
    pub date: NaiveDate,
}

impl Record for FeedbackRecord {
    const COLLECTION: Collection = Collection::Feedback;
    const REQUIRED: &'static [&'static [&'static str]] = &[
        &["username"],
        &["feedback", "message", "text"],
        &["rating"],
        &["date"],
    ];
    const ALIASES: &'static [(&'static str, &'static str)] =
        &[("feedback", "message"), ("feedback", "text")];
}

// ---------------------------------------------------------------------------
// Serde helpers
// ---------------------------------------------------------------------------

pub(crate) mod serde_helpers {
    use chrono::NaiveDateTime;
    use hostel_shared::constants::DATETIME_FORMAT;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    fn value_to_string<E: serde::de::Error>(value: Value) -> Result<String, E> {
        match value {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(E::custom(format!("expected string or number, got {other}"))),
        }
    }

    /// Identifiers written as `1` or `"C0001"` both read as a string.
    pub fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        value_to_string(Value::deserialize(d)?)
    }

    pub fn opt_string_or_number<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<String>, D::Error> {
        match Value::deserialize(d)? {
            Value::Null => Ok(None),
            other => value_to_string(other).map(Some),
        }
    }

    fn parse_timestamp<E: serde::de::Error>(s: &str) -> Result<NaiveDateTime, E> {
        NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
            .or_else(|_| s.parse::<NaiveDateTime>())
            .map_err(E::custom)
    }

    /// `YYYY-MM-DD HH:MM:SS`; ISO-8601 with a `T` separator is accepted on read.
    pub mod timestamp {
        use super::*;

        pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_str(&ts.format(DATETIME_FORMAT).to_string())
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
            let raw = String::deserialize(d)?;
            parse_timestamp(&raw)
        }
    }

    pub mod opt_timestamp {
        use super::*;

        pub fn serialize<S: Serializer>(
            ts: &Option<NaiveDateTime>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match ts {
                Some(ts) => s.serialize_str(&ts.format(DATETIME_FORMAT).to_string()),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<NaiveDateTime>, D::Error> {
            match Option::<String>::deserialize(d)? {
                Some(raw) if !raw.trim().is_empty() => parse_timestamp(&raw).map(Some),
                _ => Ok(None),
            }
        }
    }
}
