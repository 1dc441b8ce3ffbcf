//! Daily attendance marks.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::error::{require, Result, StoreError};
use crate::models::AttendanceRecord;
use crate::store::RecordStore;

impl RecordStore {
    /// Record that `username` is present today. A second mark for the same
    /// identity on the same calendar date is rejected with
    /// [`StoreError::AlreadyMarked`] and nothing is written.
    ///
    /// Identity comparison follows the store's
    /// [`AttendanceMatch`](hostel_shared::types::AttendanceMatch) policy.
    pub fn mark_attendance(
        &self,
        username: &str,
        room_number: &str,
        now: NaiveDateTime,
    ) -> Result<AttendanceRecord> {
        let username = require("Name", username)?;
        let room_number = require("Room number", room_number)?;
        let today = now.date();

        if self.has_marked(&username, today) {
            tracing::debug!(username = %username, date = %today, "attendance already marked");
            return Err(StoreError::AlreadyMarked {
                username,
                date: today,
            });
        }

        let record = AttendanceRecord {
            username,
            room_number,
            date: today,
            time: now.time().with_nanosecond(0).unwrap_or_else(|| now.time()),
        };

        self.append(&record)?;
        tracing::info!(username = %record.username, date = %record.date, "attendance marked");
        Ok(record)
    }

    pub fn has_marked(&self, username: &str, date: NaiveDate) -> bool {
        let policy = self.attendance_match();
        self.attendance()
            .iter()
            .any(|r| r.date == date && policy.same_identity(&r.username, username))
    }

    pub fn attendance(&self) -> Vec<AttendanceRecord> {
        self.load_all::<AttendanceRecord>()
    }

    /// Marks made on `date`, earliest first.
    pub fn attendance_on(&self, date: NaiveDate) -> Vec<AttendanceRecord> {
        let mut records: Vec<_> = self
            .attendance()
            .into_iter()
            .filter(|r| r.date == date)
            .collect();
        records.sort_by_key(|r| r.time);
        records
    }

    /// History of one resident, newest first.
    pub fn attendance_for(&self, username: &str) -> Vec<AttendanceRecord> {
        let policy = self.attendance_match();
        let mut records: Vec<_> = self
            .attendance()
            .into_iter()
            .filter(|r| policy.same_identity(&r.username, username))
            .collect();
        records.sort_by(|a, b| (b.date, b.time).cmp(&(a.date, a.time)));
        records
    }
}
