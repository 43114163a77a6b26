// src/store/sessions.rs
use std::collections::HashMap;
use std::sync::Mutex;

use super::lock;
use crate::error::StoreError;
use crate::models::{Session, SessionSnapshot, SessionUpdate};

const SESSION_NOT_FOUND: &str = "Session not found";

#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, username: &str) -> Result<SessionSnapshot, StoreError> {
        lock(&self.sessions)
            .get(username)
            .map(Session::snapshot)
            .ok_or_else(|| StoreError::not_found(SESSION_NOT_FOUND))
    }

    /// Replaces any existing session with a fresh one
    pub fn create(&self, username: &str) -> SessionSnapshot {
        let session = Session::new(username);
        let snapshot = session.snapshot();
        lock(&self.sessions).insert(username.to_string(), session);
        tracing::debug!(username = %username, "session created");
        snapshot
    }

    /// Counts a question and records its topic, creating the session if needed
    pub fn touch_and_add_topic(
        &self,
        username: &str,
        topic: Option<&str>,
    ) -> (SessionSnapshot, SessionUpdate) {
        self.with_session(username, |session| {
            session.update_activity();
            if let Some(topic) = topic {
                session.add_topic(topic);
            }
        })
    }

    pub fn record_quiz(
        &self,
        username: &str,
        topic: &str,
        score: f64,
        total: f64,
    ) -> (SessionSnapshot, SessionUpdate) {
        self.with_session(username, |session| {
            session.add_quiz_score(topic, score, total)
        })
    }

    /// Unlike the other mutators this never creates a session
    pub fn set_theme(&self, username: &str, theme: &str) -> Result<SessionSnapshot, StoreError> {
        let mut sessions = lock(&self.sessions);
        let session = sessions
            .get_mut(username)
            .ok_or_else(|| StoreError::not_found(SESSION_NOT_FOUND))?;
        session.set_theme(theme);
        Ok(session.snapshot())
    }

    pub fn len(&self) -> usize {
        lock(&self.sessions).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn with_session<F>(&self, username: &str, apply: F) -> (SessionSnapshot, SessionUpdate)
    where
        F: FnOnce(&mut Session),
    {
        let mut sessions = lock(&self.sessions);
        let outcome = if sessions.contains_key(username) {
            SessionUpdate::Updated
        } else {
            SessionUpdate::Created
        };
        let session = sessions
            .entry(username.to_string())
            .or_insert_with(|| Session::new(username));
        apply(session);
        (session.snapshot(), outcome)
    }
}
