// src/store/mod.rs
//! In-memory per-user state. Every store is owned by `AppState` and lives
//! for the lifetime of the process.

pub mod chat_history;
pub mod drawings;
pub mod files;
pub mod reminders;
pub mod sessions;
pub mod user_records;

pub use chat_history::{ChatHistoryStore, MAX_CHAT_HISTORY};
pub use drawings::DrawingStore;
pub use files::FileStore;
pub use reminders::ReminderStore;
pub use sessions::SessionStore;
pub use user_records::UserRecords;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Locks a store map. Critical sections never leave a map half-updated, so a
/// poisoned lock is safe to keep using.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
