//! First-run defaults.
//!
//! Seeding only writes documents that do not exist yet, so it is safe to run
//! on every start. A document that exists but cannot be read is left on disk
//! for the operator to repair.

use hostel_shared::types::Role;

use crate::error::Result;
use crate::menu::WeeklyMenu;
use crate::models::{Room, User};
use crate::store::{Collection, RecordStore, MENU_FILE};

/// What [`RecordStore::seed_defaults`] wrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub users: bool,
    pub rooms: bool,
    pub menu: bool,
}

fn account(username: &str, role: Role, room: Option<&str>, full_name: &str) -> User {
    User {
        username: username.to_string(),
        password: format!("{username}123"),
        role,
        room_number: room.map(str::to_string),
        full_name: full_name.to_string(),
    }
}

pub fn default_users() -> Vec<User> {
    vec![
        account("admin", Role::Admin, None, "Hostel Administrator"),
        account("warden", Role::Warden, None, "Hostel Warden"),
        account("sarah", Role::Resident, Some("101"), "Sarah Ahmed"),
        account("fatima", Role::Resident, Some("101"), "Fatima Khan"),
        account("aisha", Role::Resident, None, "Aisha Malik"),
    ]
}

pub fn default_rooms() -> Vec<Room> {
    vec![
        Room {
            room_number: "101".into(),
            capacity: 2,
            occupied: 2,
            residents: vec!["sarah".into(), "fatima".into()],
        },
        Room {
            room_number: "102".into(),
            capacity: 2,
            occupied: 0,
            residents: vec![],
        },
        Room {
            room_number: "103".into(),
            capacity: 3,
            occupied: 0,
            residents: vec![],
        },
    ]
}

impl RecordStore {
    pub fn seed_defaults(&self) -> Result<SeedReport> {
        let mut report = SeedReport::default();

        if !self.path_for(Collection::Users).exists() {
            self.save_all(&default_users())?;
            report.users = true;
        }
        if !self.path_for(Collection::Rooms).exists() {
            self.save_all(&default_rooms())?;
            report.rooms = true;
        }
        if !self.root().join(MENU_FILE).exists() {
            self.save_weekly_menu(&WeeklyMenu::default())?;
            report.menu = true;
        }

        if report != SeedReport::default() {
            tracing::info!(?report, "seeded default data");
        }
        Ok(report)
    }
}
