// src/models/reminder.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Identified;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: u32,
    pub title: String,
    pub subject: String,
    pub datetime: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    /// Parsed form of `datetime`, used for expiry checks
    #[serde(skip)]
    pub due_at: DateTime<Utc>,
}

impl Identified for Reminder {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewReminder {
    pub title: String,
    pub subject: String,
    pub datetime: String,
    pub notes: String,
}
