// lib.rs - Tutoring bot backend: per-user learning state and question answering
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod store;
pub mod tutor;

use axum::{extract::DefaultBodyLimit, Extension, Router};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::store::{ChatHistoryStore, DrawingStore, FileStore, ReminderStore, SessionStore};
use crate::tutor::SharedResolver;

// AppState owns every per-user store plus the answer engine; handlers reach it through Extension
pub struct AppState {
    pub sessions: SessionStore,
    pub chat_history: ChatHistoryStore,
    pub reminders: ReminderStore,
    pub drawings: DrawingStore,
    pub files: FileStore,
    pub resolver: SharedResolver,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(resolver: SharedResolver) -> Self {
        Self {
            sessions: SessionStore::new(),
            chat_history: ChatHistoryStore::new(),
            reminders: ReminderStore::new(),
            drawings: DrawingStore::new(),
            files: FileStore::new(),
            resolver,
            started_at: Utc::now(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(tutor::build_resolver(config.answer_engine))
    }
}

/// Builds the application with all routes and shared state
pub fn build_router(state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .merge(handlers::home::home_routes())
        .merge(handlers::ask::ask_routes())
        .merge(handlers::session::session_routes())
        .merge(handlers::chat::chat_routes())
        .merge(handlers::reminders::reminder_routes())
        .merge(handlers::drawings::drawing_routes())
        .merge(handlers::files::file_routes())
        .layer(axum::middleware::from_fn(
            middleware::logging::request_logging_middleware,
        ))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}
