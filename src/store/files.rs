// src/store/files.rs
use chrono::Utc;

use super::UserRecords;
use crate::error::StoreError;
use crate::models::{FileSummary, NewFile, UploadedFile};

pub struct FileStore {
    records: UserRecords<UploadedFile>,
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore {
    pub fn new() -> Self {
        Self {
            records: UserRecords::new("No files found", "File not found"),
        }
    }

    pub fn add(&self, username: &str, new: NewFile) -> Result<UploadedFile, StoreError> {
        if new.file.is_empty() || new.file_name.is_empty() {
            return Err(StoreError::validation("File data and name are required"));
        }

        let file = self.records.insert_with(username, |id| UploadedFile {
            id,
            file_name: new.file_name,
            file_type: new.file_type,
            data: new.file,
            question: new.question,
            uploaded_at: Utc::now(),
        });
        tracing::debug!(
            username = %username,
            id = file.id,
            file_type = %file.file_type,
            bytes = file.data.len(),
            "file uploaded"
        );
        Ok(file)
    }

    pub fn list(&self, username: &str) -> Vec<FileSummary> {
        self.records
            .list(username)
            .iter()
            .map(UploadedFile::summary)
            .collect()
    }

    pub fn get(&self, username: &str, id: u32) -> Result<UploadedFile, StoreError> {
        self.records.get(username, id)
    }

    pub fn delete(&self, username: &str, id: u32) -> Result<(), StoreError> {
        self.records.remove(username, id)
    }

    pub fn total(&self) -> usize {
        self.records.total()
    }
}

/// Builds the tutor's reply to an upload, which depends on whether it is an image
pub fn upload_reply(file: &UploadedFile) -> String {
    let mut reply = String::new();
    if file.is_image() {
        reply.push_str(&format!(
            "I can see you've uploaded an image: '{}'. ",
            file.file_name
        ));
        if !file.question.is_empty() {
            reply.push_str(&format!(
                "Regarding your question '{}', I'll help you analyze this image. ",
                file.question
            ));
        }
        reply.push_str("Please describe what you need help with in the image, such as:\n\n");
        reply.push_str("• Solving a math problem shown in the image\n");
        reply.push_str("• Understanding a diagram or concept\n");
        reply.push_str("• Analyzing a chart or graph\n");
        reply.push_str("• Getting help with handwritten notes\n\n");
        reply.push_str("The more specific you are, the better I can assist you!");
    } else {
        reply.push_str(&format!("I've received your file: '{}'. ", file.file_name));
        if !file.question.is_empty() {
            reply.push_str(&format!("You asked: '{}'. ", file.question));
        }
        reply.push_str(
            "I'm analyzing your file. Please provide more details about what you need help with!",
        );
    }
    reply
}
