// src/handlers/home.rs
use axum::{extract::Extension, response::Json, routing::get, Router};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::tutor::knowledge_base::SUPPORTED_SUBJECTS;
use crate::AppState;

pub const BOT_VERSION: &str = "4.0";

pub const FEATURES: &[&str] = &[
    "Enhanced responses",
    "Multiple subjects",
    "Interactive learning",
    "Session management",
    "Quiz system",
    "Chat history",
    "Theme support",
    "Study reminders",
    "Drawing board",
    "File upload",
];

pub fn home_routes() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/status", get(status))
}

/// GET / - Liveness message and feature list
async fn home() -> Json<Value> {
    Json(json!({
        "status": "AI Tutoring Bot Backend is running",
        "version": BOT_VERSION,
        "features": FEATURES,
    }))
}

/// GET /status - Aggregate counts across all users
async fn status(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    let uptime = Utc::now().signed_duration_since(state.started_at);

    Json(json!({
        "status": "operational",
        "model": format!("AI Tutoring Bot v{}", BOT_VERSION),
        "answer_engine": state.resolver.name(),
        "subjects_supported": SUPPORTED_SUBJECTS,
        "active_sessions": state.sessions.len(),
        "users_with_chat_history": state.chat_history.users(),
        "total_reminders": state.reminders.total(),
        "total_drawings": state.drawings.total(),
        "total_files": state.files.total(),
        "uptime_seconds": uptime.num_seconds().max(0),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
