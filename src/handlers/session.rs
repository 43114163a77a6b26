// src/handlers/session.rs
use axum::{
    extract::Extension,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::session::DEFAULT_THEME;
use crate::models::{SessionSnapshot, SessionUpdate};
use crate::extract::{JsonBody, PathParams};
use crate::AppState;

#[derive(Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub username: String,
}

#[derive(Deserialize)]
pub struct UpdateSessionRequest {
    #[serde(default)]
    pub topic: String,
}

#[derive(Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default = "default_quiz_total")]
    pub total: f64,
}

fn default_quiz_total() -> f64 {
    1.0
}

#[derive(Deserialize)]
pub struct ThemeRequest {
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

pub fn session_routes() -> Router {
    Router::new()
        .route("/session/create", post(create_session))
        .route("/session/:username", get(get_session))
        .route("/session/:username/update", post(update_session))
        .route("/session/:username/quiz", post(add_quiz_score))
        .route("/session/:username/theme", post(update_theme))
}

/// GET /session/:username
async fn get_session(
    PathParams(username): PathParams<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> AppResult<Json<SessionSnapshot>> {
    Ok(Json(state.sessions.get(&username)?))
}

/// POST /session/create - Start a fresh session, discarding any previous one
async fn create_session(
    Extension(state): Extension<Arc<AppState>>,
    JsonBody(request): JsonBody<CreateSessionRequest>,
) -> AppResult<Json<Value>> {
    if request.username.is_empty() {
        return Err(AppError::Validation("Username required".to_string()));
    }

    state.sessions.create(&request.username);
    state.chat_history.ensure(&request.username);
    tracing::info!(username = %request.username, "Session created");

    Ok(Json(json!({ "status": "session created" })))
}

/// POST /session/:username/update - Count a question and record its topic
async fn update_session(
    PathParams(username): PathParams<String>,
    Extension(state): Extension<Arc<AppState>>,
    JsonBody(request): JsonBody<UpdateSessionRequest>,
) -> Json<Value> {
    let topic = Some(request.topic.as_str()).filter(|t| !t.is_empty());
    let (_, outcome) = state.sessions.touch_and_add_topic(&username, topic);

    let status = match outcome {
        SessionUpdate::Updated => "updated",
        SessionUpdate::Created => "created and updated",
    };
    Json(json!({ "status": status }))
}

/// POST /session/:username/quiz
async fn add_quiz_score(
    PathParams(username): PathParams<String>,
    Extension(state): Extension<Arc<AppState>>,
    JsonBody(request): JsonBody<QuizRequest>,
) -> Json<Value> {
    let (_, outcome) =
        state
            .sessions
            .record_quiz(&username, &request.topic, request.score, request.total);

    let status = match outcome {
        SessionUpdate::Updated => "quiz score added",
        SessionUpdate::Created => "session created and quiz score added",
    };
    Json(json!({ "status": status }))
}

/// POST /session/:username/theme - Only for existing sessions
async fn update_theme(
    PathParams(username): PathParams<String>,
    Extension(state): Extension<Arc<AppState>>,
    JsonBody(request): JsonBody<ThemeRequest>,
) -> AppResult<Json<Value>> {
    let snapshot = state.sessions.set_theme(&username, &request.theme)?;
    Ok(Json(json!({
        "status": "theme updated",
        "theme": snapshot.theme_preference,
    })))
}
