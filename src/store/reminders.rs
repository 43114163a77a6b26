// src/store/reminders.rs
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use super::UserRecords;
use crate::error::StoreError;
use crate::models::{NewReminder, Reminder};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO-8601 date or datetime. Values without an offset are taken as local time.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

pub struct ReminderStore {
    records: UserRecords<Reminder>,
}

impl Default for ReminderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReminderStore {
    pub fn new() -> Self {
        Self {
            records: UserRecords::new("No reminders found", "Reminder not found"),
        }
    }

    pub fn add(&self, username: &str, new: NewReminder) -> Result<Reminder, StoreError> {
        if new.title.is_empty() || new.datetime.is_empty() {
            return Err(StoreError::validation("Title and datetime are required"));
        }
        let due_at = parse_datetime(&new.datetime)
            .ok_or_else(|| StoreError::validation("Invalid datetime format"))?;

        let reminder = self.records.insert_with(username, |id| Reminder {
            id,
            title: new.title,
            subject: new.subject,
            datetime: new.datetime,
            notes: new.notes,
            created_at: Utc::now(),
            due_at,
        });
        tracing::debug!(username = %username, id = reminder.id, "reminder added");
        Ok(reminder)
    }

    /// Active reminders. Anything due before now is purged as a side effect.
    pub fn list(&self, username: &str) -> Vec<Reminder> {
        self.list_at(username, Utc::now())
    }

    pub fn list_at(&self, username: &str, now: DateTime<Utc>) -> Vec<Reminder> {
        self.records
            .retain_and_list(username, |reminder| reminder.due_at >= now)
    }

    pub fn delete(&self, username: &str, id: u32) -> Result<(), StoreError> {
        self.records.remove(username, id)
    }

    pub fn total(&self) -> usize {
        self.records.total()
    }
}
