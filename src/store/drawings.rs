// src/store/drawings.rs
use chrono::Utc;

use super::UserRecords;
use crate::error::StoreError;
use crate::models::drawing::DEFAULT_DRAWING_TITLE;
use crate::models::{Drawing, DrawingSummary, NewDrawing};

pub struct DrawingStore {
    records: UserRecords<Drawing>,
}

impl Default for DrawingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingStore {
    pub fn new() -> Self {
        Self {
            records: UserRecords::new("No drawings found", "Drawing not found"),
        }
    }

    pub fn add(&self, username: &str, new: NewDrawing) -> Result<Drawing, StoreError> {
        if new.drawing.is_empty() {
            return Err(StoreError::validation("Drawing data is required"));
        }

        let title = new.title.unwrap_or_else(|| DEFAULT_DRAWING_TITLE.to_string());
        let drawing = self.records.insert_with(username, |id| Drawing {
            id,
            title,
            subject: new.subject,
            data: new.drawing,
            created_at: Utc::now(),
        });
        tracing::debug!(username = %username, id = drawing.id, bytes = drawing.data.len(), "drawing saved");
        Ok(drawing)
    }

    /// Metadata only, payloads are left out
    pub fn list(&self, username: &str) -> Vec<DrawingSummary> {
        self.records
            .list(username)
            .iter()
            .map(Drawing::summary)
            .collect()
    }

    pub fn get(&self, username: &str, id: u32) -> Result<Drawing, StoreError> {
        self.records.get(username, id)
    }

    pub fn delete(&self, username: &str, id: u32) -> Result<(), StoreError> {
        self.records.remove(username, id)
    }

    pub fn total(&self) -> usize {
        self.records.total()
    }
}
