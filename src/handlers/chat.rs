// src/handlers/chat.rs
use axum::{
    extract::Extension,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::AppResult;
use crate::models::{ChatEntry, Sender};
use crate::extract::{JsonBody, PathParams};
use crate::AppState;

#[derive(Deserialize)]
pub struct SaveChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub sender: Sender,
    pub timestamp: Option<String>,
}

pub fn chat_routes() -> Router {
    Router::new()
        .route("/chat/:username/history", get(get_chat_history))
        .route("/chat/:username/save", post(save_chat_message))
        .route("/chat/:username/clear", post(clear_chat_history))
}

/// GET /chat/:username/history
async fn get_chat_history(
    PathParams(username): PathParams<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> Json<Value> {
    let history = state.chat_history.get(&username);
    Json(json!({
        "count": history.len(),
        "history": history,
    }))
}

/// POST /chat/:username/save
async fn save_chat_message(
    PathParams(username): PathParams<String>,
    Extension(state): Extension<Arc<AppState>>,
    JsonBody(request): JsonBody<SaveChatRequest>,
) -> Json<Value> {
    let mut entry = ChatEntry::new(request.message, request.sender);
    if let Some(timestamp) = request.timestamp {
        entry = entry.with_timestamp(timestamp);
    }

    let count = state.chat_history.append(&username, entry);
    Json(json!({ "status": "message saved", "count": count }))
}

/// POST /chat/:username/clear
async fn clear_chat_history(
    PathParams(username): PathParams<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> AppResult<Json<Value>> {
    state.chat_history.clear(&username)?;
    Ok(Json(json!({ "status": "chat history cleared" })))
}
