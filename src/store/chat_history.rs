// src/store/chat_history.rs
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use super::lock;
use crate::error::StoreError;
use crate::models::{ChatEntry, Sender};

/// Entries kept per user; older ones are evicted first
pub const MAX_CHAT_HISTORY: usize = 100;

#[derive(Default)]
pub struct ChatHistoryStore {
    histories: Mutex<HashMap<String, VecDeque<ChatEntry>>>,
}

impl ChatHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and returns the history length after trimming
    pub fn append(&self, username: &str, entry: ChatEntry) -> usize {
        self.append_all(username, [entry])
    }

    /// Records a question and its answer as one unit
    pub fn append_exchange(&self, username: &str, question: &str, answer: &str) -> usize {
        self.append_all(
            username,
            [
                ChatEntry::new(question, Sender::User),
                ChatEntry::new(answer, Sender::Bot),
            ],
        )
    }

    /// Empty for users never seen
    pub fn get(&self, username: &str) -> Vec<ChatEntry> {
        lock(&self.histories)
            .get(username)
            .map(|history| history.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Registers an empty history without touching an existing one
    pub fn ensure(&self, username: &str) {
        lock(&self.histories)
            .entry(username.to_string())
            .or_default();
    }

    /// Fails only for usernames that were never registered; an empty history clears fine
    pub fn clear(&self, username: &str) -> Result<(), StoreError> {
        let mut histories = lock(&self.histories);
        let history = histories
            .get_mut(username)
            .ok_or_else(|| StoreError::not_found("User not found"))?;
        history.clear();
        Ok(())
    }

    /// Number of users with a registered history
    pub fn users(&self) -> usize {
        lock(&self.histories).len()
    }

    fn append_all<I>(&self, username: &str, entries: I) -> usize
    where
        I: IntoIterator<Item = ChatEntry>,
    {
        let mut histories = lock(&self.histories);
        let history = histories.entry(username.to_string()).or_default();
        history.extend(entries);
        while history.len() > MAX_CHAT_HISTORY {
            history.pop_front();
        }
        history.len()
    }
}
