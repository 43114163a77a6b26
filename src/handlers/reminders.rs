// src/handlers/reminders.rs
use axum::{
    extract::Extension,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

use super::to_json;
use crate::error::AppResult;
use crate::models::NewReminder;
use crate::extract::{JsonBody, PathParams};
use crate::AppState;

pub fn reminder_routes() -> Router {
    Router::new()
        .route("/reminders/:username", get(get_reminders))
        .route("/reminders/:username/add", post(add_reminder))
        .route("/reminders/:username/delete/:reminder_id", delete(delete_reminder))
}

/// GET /reminders/:username - Upcoming reminders; past ones are dropped here
async fn get_reminders(
    PathParams(username): PathParams<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> AppResult<Json<Value>> {
    let reminders = state.reminders.list(&username);
    Ok(Json(json!({ "reminders": to_json(&reminders)? })))
}

/// POST /reminders/:username/add
async fn add_reminder(
    PathParams(username): PathParams<String>,
    Extension(state): Extension<Arc<AppState>>,
    JsonBody(request): JsonBody<NewReminder>,
) -> AppResult<Json<Value>> {
    let reminder = state.reminders.add(&username, request)?;
    tracing::info!(username = %username, reminder_id = reminder.id, "Reminder added");

    Ok(Json(json!({
        "status": "reminder added",
        "reminder": to_json(&reminder)?,
    })))
}

/// DELETE /reminders/:username/delete/:reminder_id
async fn delete_reminder(
    PathParams((username, reminder_id)): PathParams<(String, u32)>,
    Extension(state): Extension<Arc<AppState>>,
) -> AppResult<Json<Value>> {
    state.reminders.delete(&username, reminder_id)?;
    Ok(Json(json!({ "status": "reminder deleted" })))
}
