// src/models/session.rs
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub const DEFAULT_THEME: &str = "light";

/// Scores are any JSON number, so partial credit like 3.5 is kept as sent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuizScore {
    pub score: f64,
    pub total: f64,
}

/// Per-user learning activity, alive until the process exits or the session is recreated
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub questions_asked: u64,
    pub topics_covered: BTreeSet<String>,
    pub quiz_scores: BTreeMap<String, QuizScore>,
    pub theme_preference: String,
}

impl Session {
    pub fn new(username: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            username: username.into(),
            created_at: now,
            last_activity: now,
            questions_asked: 0,
            topics_covered: BTreeSet::new(),
            quiz_scores: BTreeMap::new(),
            theme_preference: DEFAULT_THEME.to_string(),
        }
    }

    pub fn update_activity(&mut self) {
        self.last_activity = Utc::now();
        self.questions_asked += 1;
    }

    pub fn add_topic(&mut self, topic: &str) {
        if !topic.is_empty() {
            self.topics_covered.insert(topic.to_string());
        }
    }

    /// Last write wins per topic
    pub fn add_quiz_score(&mut self, topic: &str, score: f64, total: f64) {
        self.quiz_scores
            .insert(topic.to_string(), QuizScore { score, total });
    }

    pub fn set_theme(&mut self, theme: &str) {
        self.theme_preference = theme.to_string();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let elapsed = Utc::now().signed_duration_since(self.created_at);
        SessionSnapshot {
            username: self.username.clone(),
            questions_asked: self.questions_asked,
            topics_covered: self.topics_covered.iter().cloned().collect(),
            quiz_scores: self.quiz_scores.clone(),
            theme_preference: self.theme_preference.clone(),
            session_duration: format_duration(elapsed),
            session_duration_seconds: elapsed.num_seconds().max(0),
            last_activity: self.last_activity,
        }
    }
}

/// Read-only view of a session returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    pub username: String,
    pub questions_asked: u64,
    pub topics_covered: Vec<String>,
    pub quiz_scores: BTreeMap<String, QuizScore>,
    pub theme_preference: String,
    pub session_duration: String,
    pub session_duration_seconds: i64,
    pub last_activity: DateTime<Utc>,
}

/// Whether a mutation had to create the session first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionUpdate {
    Created,
    Updated,
}

/// Formats an elapsed duration as `H:MM:SS`
pub fn format_duration(elapsed: Duration) -> String {
    let total = elapsed.num_seconds().max(0);
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}
