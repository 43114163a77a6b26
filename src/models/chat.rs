// src/models/chat.rs
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    #[default]
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub message: String,
    pub sender: Sender,
    pub timestamp: String, // ISO-8601, client supplied or server generated
}

impl ChatEntry {
    pub fn new(message: impl Into<String>, sender: Sender) -> Self {
        Self {
            message: message.into(),
            sender,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }
}
