//! Aggregate figures for the staff dashboard.

use std::collections::HashSet;

use chrono::NaiveDate;
use hostel_shared::types::{AttendanceMatch, ComplaintCategory, ComplaintStatus, Role};

use crate::models::{AttendanceRecord, Complaint, Event, FeedbackRecord, Room, User};
use crate::store::RecordStore;

/// Snapshot of hostel activity on one day. Rates are percentages and are
/// `0.0` whenever their denominator is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub date: NaiveDate,
    pub total_residents: usize,
    pub present_today: usize,
    pub attendance_rate: f64,

    pub total_complaints: usize,
    pub open_complaints: usize,
    pub in_progress_complaints: usize,
    pub resolved_complaints: usize,
    pub resolution_rate: f64,
    /// Non-zero categories only, in [`ComplaintCategory::ALL`] order.
    pub complaints_by_category: Vec<(ComplaintCategory, usize)>,

    pub feedback_count: usize,
    pub average_rating: f64,

    pub total_rooms: usize,
    pub total_capacity: u64,
    pub total_occupied: u64,
    pub available_rooms: usize,

    pub total_events: usize,
    pub upcoming_events: usize,
}

/// Input collections for [`Statistics::compute`].
pub struct Snapshot<'a> {
    pub users: &'a [User],
    pub complaints: &'a [Complaint],
    pub attendance: &'a [AttendanceRecord],
    pub feedback: &'a [FeedbackRecord],
    pub rooms: &'a [Room],
    pub events: &'a [Event],
}

impl Statistics {
    pub fn compute(data: &Snapshot<'_>, today: NaiveDate, policy: AttendanceMatch) -> Self {
        let total_residents = data
            .users
            .iter()
            .filter(|u| u.role == Role::Resident)
            .count();

        // Distinct identities marked today under the matching policy.
        let present: HashSet<String> = data
            .attendance
            .iter()
            .filter(|r| r.date == today)
            .map(|r| match policy {
                AttendanceMatch::Insensitive => r.username.trim().to_lowercase(),
                AttendanceMatch::Sensitive => r.username.trim().to_string(),
            })
            .collect();
        let present_today = present.len();

        let count_status =
            |s: ComplaintStatus| data.complaints.iter().filter(|c| c.status == s).count();
        let total_complaints = data.complaints.len();
        let resolved_complaints = count_status(ComplaintStatus::Resolved);

        let complaints_by_category = ComplaintCategory::ALL
            .iter()
            .map(|cat| {
                let n = data.complaints.iter().filter(|c| c.category == *cat).count();
                (*cat, n)
            })
            .filter(|(_, n)| *n > 0)
            .collect();

        let rating_sum: u32 = data.feedback.iter().map(|f| u32::from(f.rating)).sum();
        let average_rating = if data.feedback.is_empty() {
            0.0
        } else {
            f64::from(rating_sum) / data.feedback.len() as f64
        };

        Self {
            date: today,
            total_residents,
            present_today,
            attendance_rate: percent(present_today, total_residents),
            total_complaints,
            open_complaints: count_status(ComplaintStatus::Open),
            in_progress_complaints: count_status(ComplaintStatus::InProgress),
            resolved_complaints,
            resolution_rate: percent(resolved_complaints, total_complaints),
            complaints_by_category,
            feedback_count: data.feedback.len(),
            average_rating,
            total_rooms: data.rooms.len(),
            total_capacity: data.rooms.iter().map(|r| u64::from(r.capacity)).sum(),
            total_occupied: data.rooms.iter().map(|r| u64::from(r.occupied)).sum(),
            available_rooms: data.rooms.iter().filter(|r| r.is_available()).count(),
            total_events: data.events.len(),
            upcoming_events: data.events.iter().filter(|e| e.is_upcoming(today)).count(),
        }
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

impl RecordStore {
    pub fn statistics(&self, today: NaiveDate) -> Statistics {
        let users = self.users();
        let complaints = self.complaints();
        let attendance = self.attendance();
        let feedback = self.feedback();
        let rooms = self.rooms();
        let events = self.events();

        Statistics::compute(
            &Snapshot {
                users: &users,
                complaints: &complaints,
                attendance: &attendance,
                feedback: &feedback,
                rooms: &rooms,
                events: &events,
            },
            today,
            self.attendance_match(),
        )
    }
}
