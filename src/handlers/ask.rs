// src/handlers/ask.rs
use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::tutor::resolve_or_apologize;
use crate::extract::JsonBody;
use crate::AppState;

pub const EMPTY_QUESTION_REPLY: &str = "Please ask a question! I'm here to help you learn.";

#[derive(Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub username: String,
}

pub fn ask_routes() -> Router {
    Router::new().route("/ask", post(ask))
}

/// POST /ask - Answer a question, logging the exchange when a username is given
async fn ask(
    Extension(state): Extension<Arc<AppState>>,
    JsonBody(request): JsonBody<AskRequest>,
) -> Response {
    let question = request.question.trim();
    if question.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "answer": EMPTY_QUESTION_REPLY })),
        )
            .into_response();
    }

    tracing::info!(username = %request.username, question = %question, "Question received");

    let answer = resolve_or_apologize(state.resolver.as_ref(), question);
    tracing::debug!(answer_len = answer.len(), "Answer resolved");

    if !request.username.is_empty() {
        state
            .chat_history
            .append_exchange(&request.username, question, &answer);
    }

    Json(json!({
        "answer": answer,
        "timestamp": Utc::now().to_rfc3339(),
    }))
    .into_response()
}
