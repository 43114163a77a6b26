// src/handlers/files.rs
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
use crate::models::NewFile;
use crate::store::files::upload_reply;
use crate::extract::{JsonBody, PathParams};
use crate::AppState;

pub fn file_routes() -> Router {
    Router::new()
        .route("/files/:username", get(get_uploaded_files))
        .route("/files/:username/upload", post(upload_file))
        .route(
            "/files/:username/:file_id",
            get(get_uploaded_file).delete(delete_uploaded_file),
        )
}

/// POST /files/:username/upload - Store the file and reply with tutoring guidance
async fn upload_file(
    PathParams(username): PathParams<String>,
    Extension(state): Extension<Arc<AppState>>,
    JsonBody(request): JsonBody<NewFile>,
) -> AppResult<Json<Value>> {
    let file = state.files.add(&username, request)?;
    tracing::info!(
        username = %username,
        file_id = file.id,
        file_type = %file.file_type,
        "File uploaded"
    );

    Ok(Json(json!({
        "status": "file uploaded",
        "fileId": file.id,
        "response": upload_reply(&file),
    })))
}

/// GET /files/:username - Metadata only
async fn get_uploaded_files(
    PathParams(username): PathParams<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> AppResult<Json<Value>> {
    let files = state.files.list(&username);
    Ok(Json(json!({ "files": to_json(&files)? })))
}

/// GET /files/:username/:file_id
async fn get_uploaded_file(
    PathParams((username, file_id)): PathParams<(String, u32)>,
    Extension(state): Extension<Arc<AppState>>,
) -> AppResult<Json<Value>> {
    let file = state.files.get(&username, file_id)?;
    Ok(Json(json!({ "file": to_json(&file)? })))
}

/// DELETE /files/:username/:file_id
async fn delete_uploaded_file(
    PathParams((username, file_id)): PathParams<(String, u32)>,
    Extension(state): Extension<Arc<AppState>>,
) -> AppResult<Json<Value>> {
    state.files.delete(&username, file_id)?;
    Ok(Json(json!({ "status": "file deleted" })))
}
