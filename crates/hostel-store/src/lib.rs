//! # hostel-store
//!
//! Flat-file storage for the hostel desk, one JSON document per collection.
//!
//! The crate exposes a synchronous [`RecordStore`] handle over a data
//! directory and provides typed read/append/update helpers for every domain
//! record, split by domain into `users`, `complaints`, `attendance`,
//! `events`, `rooms`, `feedback`, `menu` and `stats`. Every helper reloads
//! the documents it needs; nothing is cached between calls.

pub mod attendance;
pub mod complaints;
pub mod events;
pub mod feedback;
pub mod menu;
pub mod models;
pub mod rooms;
pub mod seed;
pub mod stats;
pub mod store;
pub mod users;

mod error;

pub use error::StoreError;
pub use events::NewEvent;
pub use menu::WeeklyMenu;
pub use models::*;
pub use rooms::Allocation;
pub use seed::SeedReport;
pub use stats::Statistics;
pub use store::{Collection, RecordStore};
