use chrono::NaiveDateTime;
use hostel_shared::constants::{MAX_RATING, MIN_RATING};

use crate::error::{require, Result, StoreError};
use crate::models::FeedbackRecord;
use crate::store::RecordStore;

impl RecordStore {
    pub fn submit_feedback(
        &self,
        username: &str,
        category: &str,
        feedback: &str,
        rating: u8,
        now: NaiveDateTime,
    ) -> Result<FeedbackRecord> {
        let username = require("Name", username)?;
        let feedback = require("Feedback", feedback)?;
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(StoreError::Validation(format!(
                "Rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }

        let category = match category.trim() {
            "" => "General".to_string(),
            other => other.to_string(),
        };

        let record = FeedbackRecord {
            username,
            category,
            feedback,
            rating,
            date: now.date(),
        };
        self.append(&record)?;
        tracing::info!(username = %record.username, rating, "feedback submitted");
        Ok(record)
    }

    pub fn feedback(&self) -> Vec<FeedbackRecord> {
        self.load_all::<FeedbackRecord>()
    }
}
