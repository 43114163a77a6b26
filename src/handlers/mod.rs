// src/handlers/mod.rs
pub mod ask;
pub mod chat;
pub mod drawings;
pub mod files;
pub mod home;
pub mod reminders;
pub mod session;

use serde::Serialize;
use serde_json::Value;

use crate::error::AppResult;

/// Serializes a record for embedding in a `json!` body
pub(crate) fn to_json<T: Serialize>(value: &T) -> AppResult<Value> {
    Ok(serde_json::to_value(value)?)
}
