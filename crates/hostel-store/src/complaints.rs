//! Complaint submission and status tracking.

use chrono::NaiveDateTime;
use hostel_shared::constants::COMPLAINT_ID_PREFIX;
use hostel_shared::types::{ComplaintCategory, ComplaintStatus};

use crate::error::{require, Result, StoreError};
use crate::models::{Complaint, Record};
use crate::store::{Collection, RecordStore};

impl RecordStore {
    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// File a new complaint. The id is the collection size plus one, so ids
    /// stay unique as long as nothing is ever deleted.
    pub fn submit_complaint(
        &self,
        username: &str,
        room_number: Option<&str>,
        category: ComplaintCategory,
        description: &str,
        now: NaiveDateTime,
    ) -> Result<Complaint> {
        let username = require("Name", username)?;
        let description = require("Complaint", description)?;

        let sequence = self.count(Collection::Complaints) + 1;
        let complaint = Complaint {
            complaint_id: self.id_style().format(COMPLAINT_ID_PREFIX, sequence),
            username,
            room_number: room_number
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string),
            category,
            description,
            status: ComplaintStatus::Open,
            submitted_date: now,
            resolved_date: None,
        };

        self.append(&complaint)?;
        tracing::info!(
            id = %complaint.complaint_id,
            username = %complaint.username,
            category = %complaint.category,
            "complaint submitted"
        );
        Ok(complaint)
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    /// Every complaint, in submission order.
    pub fn complaints(&self) -> Vec<Complaint> {
        self.load_all::<Complaint>()
    }

    pub fn complaints_for(&self, username: &str) -> Vec<Complaint> {
        let username = username.trim();
        self.complaints()
            .into_iter()
            .filter(|c| c.username == username)
            .collect()
    }

    pub fn complaints_with_status(&self, status: ComplaintStatus) -> Vec<Complaint> {
        self.complaints()
            .into_iter()
            .filter(|c| c.status == status)
            .collect()
    }

    pub fn find_complaint(&self, complaint_id: &str) -> Option<Complaint> {
        self.complaints()
            .into_iter()
            .find(|c| same_id(&c.complaint_id, complaint_id))
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// Move a complaint to `status`. Resolving stamps `resolved_date`.
    pub fn update_complaint_status(
        &self,
        complaint_id: &str,
        status: ComplaintStatus,
        now: NaiveDateTime,
    ) -> Result<Complaint> {
        let mut raw = self.load(Collection::Complaints);

        let (index, mut complaint) = raw
            .iter()
            .enumerate()
            .find_map(|(i, r)| {
                Complaint::from_raw(r)
                    .ok()
                    .filter(|c| same_id(&c.complaint_id, complaint_id))
                    .map(|c| (i, c))
            })
            .ok_or_else(|| StoreError::not_found("Complaint", complaint_id.trim()))?;

        if !complaint.status.can_transition_to(status) {
            return Err(StoreError::InvalidTransition {
                id: complaint.complaint_id,
                from: complaint.status,
                to: status,
            });
        }

        complaint.status = status;
        if status == ComplaintStatus::Resolved {
            complaint.resolved_date = Some(now);
        }

        raw[index] = complaint.to_raw();
        self.save(Collection::Complaints, &raw)?;

        tracing::info!(id = %complaint.complaint_id, status = %status, "complaint updated");
        Ok(complaint)
    }
}

/// Ids are compared case-insensitively so `c0001` finds `C0001`.
fn same_id(stored: &str, wanted: &str) -> bool {
    stored.trim().eq_ignore_ascii_case(wanted.trim())
}
