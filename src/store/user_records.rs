// src/store/user_records.rs
use std::collections::HashMap;
use std::sync::Mutex;

use super::lock;
use crate::error::StoreError;
use crate::models::Identified;

/// Ordered per-user collection with sequential ids.
///
/// Ids are `current length + 1` at insert time, so an id can be handed out
/// again after a delete. Clients rely on this numbering.
pub struct UserRecords<T> {
    records: Mutex<HashMap<String, Vec<T>>>,
    missing_user: &'static str,
    missing_record: &'static str,
}

impl<T: Identified + Clone> UserRecords<T> {
    /// Messages reported for an unknown username and for an unknown id
    pub fn new(missing_user: &'static str, missing_record: &'static str) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            missing_user,
            missing_record,
        }
    }

    /// Assigns the next id and appends the record built from it, atomically
    pub fn insert_with<F>(&self, username: &str, build: F) -> T
    where
        F: FnOnce(u32) -> T,
    {
        let mut records = lock(&self.records);
        let list = records.entry(username.to_string()).or_default();
        let record = build(list.len() as u32 + 1);
        list.push(record.clone());
        record
    }

    /// Returns all records, registering an empty collection for unknown users
    pub fn list(&self, username: &str) -> Vec<T> {
        let mut records = lock(&self.records);
        records.entry(username.to_string()).or_default().clone()
    }

    /// Drops records failing `keep` from storage, then returns the survivors
    pub fn retain_and_list<F>(&self, username: &str, keep: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut records = lock(&self.records);
        let list = records.entry(username.to_string()).or_default();
        list.retain(keep);
        list.clone()
    }

    pub fn get(&self, username: &str, id: u32) -> Result<T, StoreError> {
        let records = lock(&self.records);
        records
            .get(username)
            .ok_or_else(|| StoreError::not_found(self.missing_user))?
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(self.missing_record))
    }

    /// Removes every record with `id`. Succeeds even when nothing matched;
    /// only an unknown username is an error.
    pub fn remove(&self, username: &str, id: u32) -> Result<(), StoreError> {
        let mut records = lock(&self.records);
        let list = records
            .get_mut(username)
            .ok_or_else(|| StoreError::not_found(self.missing_user))?;
        list.retain(|record| record.id() != id);
        Ok(())
    }

    /// Number of records across all users
    pub fn total(&self) -> usize {
        lock(&self.records).values().map(Vec::len).sum()
    }
}
