// src/handlers/drawings.rs
use axum::{
    extract::Extension,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

use super::to_json;
use crate::error::AppResult;
use crate::models::NewDrawing;
use crate::extract::{JsonBody, PathParams};
use crate::AppState;

pub fn drawing_routes() -> Router {
    Router::new()
        .route("/drawings/:username", get(get_drawings))
        .route("/drawings/:username/save", post(save_drawing))
        .route(
            "/drawings/:username/:drawing_id",
            get(get_drawing).delete(delete_drawing),
        )
}

/// POST /drawings/:username/save - Responds with metadata only
async fn save_drawing(
    PathParams(username): PathParams<String>,
    Extension(state): Extension<Arc<AppState>>,
    JsonBody(request): JsonBody<NewDrawing>,
) -> AppResult<Json<Value>> {
    let drawing = state.drawings.add(&username, request)?;
    tracing::info!(username = %username, drawing_id = drawing.id, "Drawing saved");

    Ok(Json(json!({
        "status": "drawing saved",
        "drawing": to_json(&drawing.summary())?,
    })))
}

/// GET /drawings/:username
async fn get_drawings(
    PathParams(username): PathParams<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> AppResult<Json<Value>> {
    let drawings = state.drawings.list(&username);
    Ok(Json(json!({ "drawings": to_json(&drawings)? })))
}

/// GET /drawings/:username/:drawing_id - Includes the image payload
async fn get_drawing(
    PathParams((username, drawing_id)): PathParams<(String, u32)>,
    Extension(state): Extension<Arc<AppState>>,
) -> AppResult<Json<Value>> {
    let drawing = state.drawings.get(&username, drawing_id)?;
    Ok(Json(json!({ "drawing": to_json(&drawing)? })))
}

/// DELETE /drawings/:username/:drawing_id
async fn delete_drawing(
    PathParams((username, drawing_id)): PathParams<(String, u32)>,
    Extension(state): Extension<Arc<AppState>>,
) -> AppResult<Json<Value>> {
    state.drawings.delete(&username, drawing_id)?;
    Ok(Json(json!({ "status": "drawing deleted" })))
}
