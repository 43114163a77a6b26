// src/models/drawing.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Identified;

pub const DEFAULT_DRAWING_TITLE: &str = "Untitled Drawing";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub id: u32,
    pub title: String,
    pub subject: String,
    pub data: String,
    pub created_at: DateTime<Utc>,
}

impl Drawing {
    pub fn summary(&self) -> DrawingSummary {
        DrawingSummary {
            id: self.id,
            title: self.title.clone(),
            subject: self.subject.clone(),
            created_at: self.created_at,
        }
    }
}

impl Identified for Drawing {
    fn id(&self) -> u32 {
        self.id
    }
}

/// Drawing without its (potentially large) image payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingSummary {
    pub id: u32,
    pub title: String,
    pub subject: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewDrawing {
    #[serde(default)]
    pub drawing: String,
    pub title: Option<String>,
    #[serde(default)]
    pub subject: String,
}
