//! Rooms and resident allocation.

use crate::error::{require, Result, StoreError};
use crate::models::{Record, Room, User};
use crate::store::{Collection, RecordStore};

/// Outcome of a successful [`RecordStore::allocate_room`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub room: Room,
    pub user: User,
}

impl RecordStore {
    pub fn rooms(&self) -> Vec<Room> {
        self.load_all::<Room>()
    }

    pub fn find_room(&self, room_number: &str) -> Option<Room> {
        let room_number = room_number.trim();
        self.rooms().into_iter().find(|r| r.room_number == room_number)
    }

    /// Rooms with at least one free bed.
    pub fn available_rooms(&self) -> Vec<Room> {
        self.rooms().into_iter().filter(Room::is_available).collect()
    }

    /// The room whose resident list names `username`.
    pub fn room_of(&self, username: &str) -> Option<Room> {
        let username = username.trim();
        self.rooms()
            .into_iter()
            .find(|r| r.residents.iter().any(|name| name == username))
    }

    pub fn add_room(&self, room_number: &str, capacity: u32) -> Result<Room> {
        let room_number = require("Room number", room_number)?;
        if capacity == 0 {
            return Err(StoreError::Validation(
                "Capacity must be at least 1".to_string(),
            ));
        }
        if self.find_room(&room_number).is_some() {
            return Err(StoreError::Duplicate {
                kind: "Room",
                key: room_number,
            });
        }

        let room = Room {
            room_number,
            capacity,
            occupied: 0,
            residents: Vec::new(),
        };
        self.append(&room)?;
        tracing::info!(room = %room.room_number, capacity, "room added");
        Ok(room)
    }

    /// Place `username` in `room_number`.
    ///
    /// A full room is rejected before anything is written. Otherwise the
    /// username is appended to the resident list if not already present, the
    /// occupied counter is incremented, and the user's `room_number` is
    /// updated. The rooms document is saved before the users document; the
    /// two writes are not atomic.
    pub fn allocate_room(&self, username: &str, room_number: &str) -> Result<Allocation> {
        let username = require("Username", username)?;
        let room_number = require("Room number", room_number)?;

        let mut user = self
            .find_user(&username)
            .ok_or_else(|| StoreError::not_found("User", username.clone()))?;

        let mut raw_rooms = self.load(Collection::Rooms);
        let (index, mut room) = raw_rooms
            .iter()
            .enumerate()
            .find_map(|(i, r)| {
                Room::from_raw(r)
                    .ok()
                    .filter(|room| room.room_number == room_number)
                    .map(|room| (i, room))
            })
            .ok_or_else(|| StoreError::not_found("Room", room_number.clone()))?;

        if !room.is_available() {
            tracing::debug!(room = %room.room_number, "allocation rejected, room full");
            return Err(StoreError::RoomUnavailable {
                room_number: room.room_number,
                occupied: room.occupied,
                capacity: room.capacity,
            });
        }

        if !room.residents.contains(&user.username) {
            room.residents.push(user.username.clone());
        }
        room.occupied += 1;
        raw_rooms[index] = room.to_raw();
        self.save(Collection::Rooms, &raw_rooms)?;

        user.room_number = Some(room.room_number.clone());
        self.put_user(&user)?;

        tracing::info!(username = %user.username, room = %room.room_number, "room allocated");
        Ok(Allocation { room, user })
    }
}
