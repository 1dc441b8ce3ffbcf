//! Weekly mess menu.
//!
//! Unlike the record collections, the menu document is a JSON object keyed by
//! weekday name:
//!
//! ```json
//! { "Monday": { "breakfast": "...", "lunch": "...", "dinner": "..." }, ... }
//! ```
//!
//! Days missing from the document (or the whole document, when absent or
//! malformed) fall back to the compiled-in default menu.

use chrono::Weekday;
use hostel_shared::content::default_menu_for;
use hostel_shared::types::{weekday_name, DayMenu, WEEK};
use serde_json::{Map, Value};

use crate::error::{require, Result};
use crate::store::{RecordStore, MENU_FILE};

/// Meals for all seven days, Monday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyMenu {
    days: [DayMenu; 7],
}

impl Default for WeeklyMenu {
    fn default() -> Self {
        Self {
            days: WEEK.map(default_menu_for),
        }
    }
}

impl WeeklyMenu {
    pub fn day(&self, day: Weekday) -> &DayMenu {
        &self.days[day.num_days_from_monday() as usize]
    }

    pub fn set_day(&mut self, day: Weekday, menu: DayMenu) {
        self.days[day.num_days_from_monday() as usize] = menu;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DayMenu)> {
        WEEK.into_iter().zip(self.days.iter())
    }

    fn from_document(document: &Value) -> Self {
        let mut menu = Self::default();
        let Value::Object(map) = document else {
            tracing::warn!("menu document is not an object, using defaults");
            return menu;
        };

        for day in WEEK {
            let Some(entry) = map.get(weekday_name(day)) else {
                continue;
            };
            match serde_json::from_value::<DayMenu>(entry.clone()) {
                Ok(parsed) => menu.set_day(day, parsed),
                Err(e) => tracing::warn!(day = weekday_name(day), error = %e, "bad menu entry"),
            }
        }
        menu
    }

    fn to_document(&self) -> Value {
        let map: Map<String, Value> = self
            .iter()
            .map(|(day, meals)| {
                let value = serde_json::to_value(meals).unwrap_or(Value::Null);
                (weekday_name(day).to_string(), value)
            })
            .collect();
        Value::Object(map)
    }
}

impl RecordStore {
    pub fn weekly_menu(&self) -> WeeklyMenu {
        self.read_document(&self.root().join(MENU_FILE))
            .map(|doc| WeeklyMenu::from_document(&doc))
            .unwrap_or_default()
    }

    pub fn menu_for_day(&self, day: Weekday) -> DayMenu {
        self.weekly_menu().day(day).clone()
    }

    pub fn save_weekly_menu(&self, menu: &WeeklyMenu) -> Result<()> {
        self.write_document(&self.root().join(MENU_FILE), &menu.to_document())
    }

    /// Replace one day's meals. All three meals are required.
    pub fn update_menu_day(&self, day: Weekday, meals: DayMenu) -> Result<DayMenu> {
        let meals = DayMenu {
            breakfast: require("Breakfast", &meals.breakfast)?,
            lunch: require("Lunch", &meals.lunch)?,
            dinner: require("Dinner", &meals.dinner)?,
        };

        let mut menu = self.weekly_menu();
        menu.set_day(day, meals.clone());
        self.save_weekly_menu(&menu)?;

        tracing::info!(day = weekday_name(day), "menu updated");
        Ok(meals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_document_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open_at(dir.path());
        assert_eq!(store.weekly_menu(), WeeklyMenu::default());
        assert_eq!(store.menu_for_day(Weekday::Sat).dinner, "Pizza/Pasta Night");
    }

    #[test]
    fn test_update_day_keeps_others() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open_at(dir.path());

        store
            .update_menu_day(Weekday::Tue, DayMenu::new("Toast", "Pasta", "Soup"))
            .unwrap();

        let menu = store.weekly_menu();
        assert_eq!(menu.day(Weekday::Tue).lunch, "Pasta");
        assert_eq!(menu.day(Weekday::Mon), &default_menu_for(Weekday::Mon));

        let text = fs::read_to_string(dir.path().join(MENU_FILE)).unwrap();
        assert!(text.contains("\"Tuesday\""));
    }

    #[test]
    fn test_blank_meal_rejected() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open_at(dir.path());
        let err = store
            .update_menu_day(Weekday::Tue, DayMenu::new("Toast", "", "Soup"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(!dir.path().join(MENU_FILE).exists());
    }

    #[test]
    fn test_partial_and_capitalised_document() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open_at(dir.path());
        fs::write(
            dir.path().join(MENU_FILE),
            r#"{"Friday": {"Breakfast": "Nihari", "Lunch": "Rice", "Dinner": "Roti"}, "Sunday": 3}"#,
        )
        .unwrap();

        let menu = store.weekly_menu();
        assert_eq!(menu.day(Weekday::Fri).breakfast, "Nihari");
        assert_eq!(menu.day(Weekday::Sun), &default_menu_for(Weekday::Sun));
    }
}
