// src/models/file.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Identified;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: u32,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "fileType")]
    pub file_type: String,
    pub data: String,
    pub question: String,
    pub uploaded_at: DateTime<Utc>,
}

impl UploadedFile {
    pub fn summary(&self) -> FileSummary {
        FileSummary {
            id: self.id,
            file_name: self.file_name.clone(),
            file_type: self.file_type.clone(),
            question: self.question.clone(),
            uploaded_at: self.uploaded_at,
        }
    }

    pub fn is_image(&self) -> bool {
        self.file_type.starts_with("image/")
    }
}

impl Identified for UploadedFile {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSummary {
    pub id: u32,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "fileType")]
    pub file_type: String,
    pub question: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewFile {
    pub file: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "fileType")]
    pub file_type: String,
    pub question: String,
}
