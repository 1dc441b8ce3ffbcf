//! JSON document management.
//!
//! The [`RecordStore`] owns a data directory holding one JSON document per
//! [`Collection`]. Documents are always read and written whole: `load`
//! returns the complete collection and `save` overwrites it. There is no
//! locking and no transactional guarantee; concurrent writers race and the
//! last write wins.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use hostel_shared::types::{AttendanceMatch, IdStyle};
use serde_json::Value;

use crate::error::{Result, StoreError};
use crate::models::{RawRecord, Record};

/// Name of the weekly menu document (a JSON object, not an array).
pub const MENU_FILE: &str = "menu.json";

/// The record collections, each backed by `<name>.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Complaints,
    Events,
    Rooms,
    Attendance,
    Feedback,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Complaints => "complaints",
            Self::Events => "events",
            Self::Rooms => "rooms",
            Self::Attendance => "attendance",
            Self::Feedback => "feedback",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle to a data directory of JSON collections.
#[derive(Debug, Clone)]
pub struct RecordStore {
    root: PathBuf,
    id_style: IdStyle,
    attendance_match: AttendanceMatch,
}

impl RecordStore {
    /// Platform data directory:
    /// - Linux:   `~/.local/share/hosteldesk/`
    /// - macOS:   `~/Library/Application Support/com.hosteldesk.hosteldesk/`
    /// - Windows: `{FOLDERID_RoamingAppData}\hosteldesk\hosteldesk\data\`
    pub fn default_data_dir() -> Result<PathBuf> {
        let project_dirs =
            ProjectDirs::from("com", "hosteldesk", "hosteldesk").ok_or(StoreError::NoDataDir)?;
        Ok(project_dirs.data_dir().to_path_buf())
    }

    /// Use an explicit data directory. Nothing is created until the first
    /// save.
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        let root = path.into();
        tracing::info!(path = %root.display(), "using data directory");
        Self {
            root,
            id_style: IdStyle::default(),
            attendance_match: AttendanceMatch::default(),
        }
    }

    pub fn with_id_style(mut self, id_style: IdStyle) -> Self {
        self.id_style = id_style;
        self
    }

    pub fn with_attendance_match(mut self, attendance_match: AttendanceMatch) -> Self {
        self.attendance_match = attendance_match;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn id_style(&self) -> IdStyle {
        self.id_style
    }

    pub fn attendance_match(&self) -> AttendanceMatch {
        self.attendance_match
    }

    pub fn path_for(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.file_name())
    }

    // ------------------------------------------------------------------
    // Raw documents
    // ------------------------------------------------------------------

    /// Load a collection. A missing or unparsable document yields an empty
    /// collection; entries that are not JSON objects are dropped.
    pub fn load(&self, collection: Collection) -> Vec<RawRecord> {
        let path = self.path_for(collection);
        let Some(document) = self.read_document(&path) else {
            return Vec::new();
        };

        let Value::Array(entries) = document else {
            tracing::warn!(%collection, "document is not an array, treating as empty");
            return Vec::new();
        };

        entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::Object(map) => Some(map),
                other => {
                    tracing::warn!(%collection, entry = %other, "dropping non-object entry");
                    None
                }
            })
            .collect()
    }

    /// Overwrite a collection with `records`.
    pub fn save(&self, collection: Collection, records: &[RawRecord]) -> Result<()> {
        let document = Value::Array(records.iter().cloned().map(Value::Object).collect());
        self.write_document(&self.path_for(collection), &document)?;
        tracing::debug!(%collection, count = records.len(), "saved collection");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Typed views
    // ------------------------------------------------------------------

    /// Load and convert every record; entries that fail conversion are
    /// skipped with a warning.
    pub fn load_all<T: Record>(&self) -> Vec<T> {
        self.load(T::COLLECTION)
            .iter()
            .filter_map(|raw| match T::from_raw(raw) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(collection = %T::COLLECTION, error = %e, "skipping record");
                    None
                }
            })
            .collect()
    }

    pub fn save_all<T: Record>(&self, records: &[T]) -> Result<()> {
        let raw: Vec<RawRecord> = records.iter().map(Record::to_raw).collect();
        self.save(T::COLLECTION, &raw)
    }

    /// Append one record to its collection, keeping every existing entry
    /// (including ones this version cannot read) untouched.
    pub(crate) fn append<T: Record>(&self, record: &T) -> Result<()> {
        let mut raw = self.load(T::COLLECTION);
        raw.push(record.to_raw());
        self.save(T::COLLECTION, &raw)
    }

    /// Number of entries currently in a collection, used for sequential ids.
    pub(crate) fn count(&self, collection: Collection) -> usize {
        self.load(collection).len()
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    pub(crate) fn read_document(&self, path: &Path) -> Option<Value> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read document");
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "malformed document, treating as empty");
                None
            }
        }
    }

    pub(crate) fn write_document(&self, path: &Path, document: &Value) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let text = serde_json::to_string_pretty(document)?;
        fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use hostel_shared::types::Role;
    use serde_json::json;
    use tempfile::TempDir;

    fn test_store() -> (RecordStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open_at(dir.path().join("data"));
        (store, dir)
    }

    #[test]
    fn test_missing_document_is_empty() {
        let (store, _dir) = test_store();
        assert!(store.load(Collection::Complaints).is_empty());
        assert!(store.load_all::<User>().is_empty());
    }

    #[test]
    fn test_truncated_document_is_empty() {
        let (store, _dir) = test_store();
        fs::create_dir_all(store.root()).unwrap();
        fs::write(store.path_for(Collection::Events), "[{\"title\": \"Par").unwrap();
        assert!(store.load(Collection::Events).is_empty());
    }

    #[test]
    fn test_non_array_document_is_empty() {
        let (store, _dir) = test_store();
        fs::create_dir_all(store.root()).unwrap();
        fs::write(store.path_for(Collection::Rooms), "{\"101\": {}}").unwrap();
        assert!(store.load(Collection::Rooms).is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let (store, _dir) = test_store();
        let records: Vec<RawRecord> = ["a", "b", "c"]
            .iter()
            .map(|n| match json!({ "username": n }) {
                Value::Object(map) => map,
                _ => unreachable!(),
            })
            .collect();

        store.save(Collection::Users, &records).unwrap();
        assert_eq!(store.load(Collection::Users), records);
    }

    #[test]
    fn test_unreadable_entries_are_skipped_but_kept() {
        let (store, _dir) = test_store();
        fs::create_dir_all(store.root()).unwrap();
        fs::write(
            store.path_for(Collection::Users),
            r#"[{"username": "ghost"}, 7, {"username": "sarah", "password": "x", "role": "resident"}]"#,
        )
        .unwrap();

        let users = store.load_all::<User>();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "sarah");

        store
            .append(&User {
                username: "aisha".into(),
                password: "y".into(),
                role: Role::Resident,
                room_number: None,
                full_name: String::new(),
            })
            .unwrap();
        // The non-object entry is dropped, the incomplete user survives.
        assert_eq!(store.count(Collection::Users), 3);
    }

    #[test]
    fn test_unicode_is_written_verbatim() {
        let (store, _dir) = test_store();
        let mut map = RawRecord::new();
        map.insert("title".into(), json!("Café ☕"));
        store.save(Collection::Events, &[map]).unwrap();

        let text = fs::read_to_string(store.path_for(Collection::Events)).unwrap();
        assert!(text.contains("Café ☕"));
    }
}
