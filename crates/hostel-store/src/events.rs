//! Hostel events announced by staff.

use chrono::{NaiveDate, NaiveDateTime};
use hostel_shared::constants::{DATE_FORMAT, EVENT_ID_PREFIX};

use crate::error::{require, Result, StoreError};
use crate::models::{Event, Record};
use crate::store::{Collection, RecordStore};

/// Input for [`RecordStore::add_event`].
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub time: Option<String>,
    pub venue: Option<String>,
}

impl RecordStore {
    pub fn add_event(&self, draft: NewEvent, now: NaiveDateTime) -> Result<Event> {
        let title = require("Event name", &draft.title)?;
        let description = require("Event details", &draft.description)?;
        let date_str = require("Event date", &draft.date)?;
        let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT).map_err(|_| {
            StoreError::Validation(format!("Event date must look like 2025-01-15, got {date_str}"))
        })?;

        let sequence = self.count(Collection::Events) + 1;
        let event = Event {
            event_id: self.id_style().format(EVENT_ID_PREFIX, sequence),
            title,
            description,
            date: date.format(DATE_FORMAT).to_string(),
            time: non_blank(draft.time),
            venue: non_blank(draft.venue),
            created_at: now,
        };

        self.append(&event)?;
        tracing::info!(id = %event.event_id, title = %event.title, date = %event.date, "event added");
        Ok(event)
    }

    /// Every event in creation order. Events stored without an id get one
    /// derived from their position in the document, matching the sequence
    /// [`RecordStore::add_event`] would have assigned.
    pub fn events(&self) -> Vec<Event> {
        let style = self.id_style();
        self.load(Collection::Events)
            .iter()
            .enumerate()
            .filter_map(|(i, raw)| match Event::from_raw(raw) {
                Ok(mut event) => {
                    if event.event_id.trim().is_empty() {
                        event.event_id = style.format(EVENT_ID_PREFIX, i + 1);
                    }
                    Some(event)
                }
                Err(e) => {
                    tracing::warn!(position = i + 1, error = %e, "skipping event");
                    None
                }
            })
            .collect()
    }

    /// Events on or after `today`, soonest first. Events whose date cannot
    /// be read are kept and listed last.
    pub fn upcoming_events(&self, today: NaiveDate) -> Vec<Event> {
        let mut events: Vec<_> = self
            .events()
            .into_iter()
            .filter(|e| e.is_upcoming(today))
            .collect();
        events.sort_by_key(|e| (e.day().is_none(), e.day()));
        events
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn now() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2025-01-10 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn draft(title: &str, date: &str) -> NewEvent {
        NewEvent {
            title: title.into(),
            description: "All residents welcome".into(),
            date: date.into(),
            time: Some("18:00".into()),
            venue: Some("   ".into()),
        }
    }

    #[test]
    fn test_add_event() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open_at(dir.path());

        let event = store.add_event(draft("Movie Night", "2025-01-20"), now()).unwrap();
        assert_eq!(event.event_id, "E0001");
        assert_eq!(event.time.as_deref(), Some("18:00"));
        assert!(event.venue.is_none());

        let second = store.add_event(draft("Sports Day", "2025-02-01"), now()).unwrap();
        assert_eq!(second.event_id, "E0002");
        assert_eq!(store.events().len(), 2);
    }

    #[test]
    fn test_invalid_event_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open_at(dir.path());

        assert!(matches!(
            store.add_event(draft("", "2025-01-20"), now()),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            store.add_event(draft("Party", "next friday"), now()),
            Err(StoreError::Validation(_))
        ));
        assert!(store.events().is_empty());
    }

    #[test]
    fn test_upcoming_excludes_past_and_sorts() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open_at(dir.path());

        store.add_event(draft("Late", "2025-03-01"), now()).unwrap();
        store.add_event(draft("Past", "2025-01-01"), now()).unwrap();
        store.add_event(draft("Soon", "2025-01-12"), now()).unwrap();

        let today = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
        let titles: Vec<_> = store
            .upcoming_events(today)
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, ["Soon", "Late"]);
    }

    #[test]
    fn test_legacy_events_get_ids() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open_at(dir.path());
        fs::write(
            store.path_for(Collection::Events),
            r#"[{"name": "Eid Dinner", "date": "2025-03-30", "details": "Mess hall", "added_on": "2025-03-01 12:00:00"}]"#,
        )
        .unwrap();

        let events = store.events();
        assert_eq!(events[0].event_id, "E0001");
        assert_eq!(events[0].title, "Eid Dinner");
    }

    #[test]
    fn test_free_text_dates_survive_listing() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open_at(dir.path());
        fs::write(
            store.path_for(Collection::Events),
            r#"[
                {"name": "Eid Dinner", "date": "15 Jan 2025", "added_on": "2025-01-01 12:00:00"},
                {"name": "Talent Show", "date": "after exams", "added_on": "2025-01-02 12:00:00"},
                {"name": "Quiz", "date": "2025-01-20", "added_on": "2025-01-03 12:00:00"}
            ]"#,
        )
        .unwrap();

        let listed: Vec<_> = store
            .events()
            .into_iter()
            .map(|e| (e.event_id, e.title))
            .collect();
        assert_eq!(
            listed,
            [
                ("E0001".to_string(), "Eid Dinner".to_string()),
                ("E0002".to_string(), "Talent Show".to_string()),
                ("E0003".to_string(), "Quiz".to_string()),
            ]
        );

        let today = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
        let upcoming: Vec<_> = store
            .upcoming_events(today)
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(upcoming, ["Eid Dinner", "Quiz", "Talent Show"]);

        let next = store.add_event(draft("Sports Day", "2025-02-01"), now()).unwrap();
        assert_eq!(next.event_id, "E0004");
        assert_eq!(next.date, "2025-02-01");
    }

    #[test]
    fn test_unreadable_event_keeps_later_ids_stable() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open_at(dir.path());
        fs::write(
            store.path_for(Collection::Events),
            r#"[{"name": "No date"}, {"name": "Quiz", "date": "2025-01-20", "added_on": "2025-01-03 12:00:00"}]"#,
        )
        .unwrap();

        let events = store.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_id, "E0002");
    }
}
