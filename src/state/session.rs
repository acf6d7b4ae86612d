//! Session record storage.
//!
//! DESIGN
//! ======
//! The record lives as JSON under a single key in a host-provided key-value
//! store (tab-scoped `sessionStorage` in the browser). `SessionStore` is the
//! only writer, so a record exists exactly while the tab is logged in.
//!
//! ERROR HANDLING
//! ==============
//! A stored value that no longer decodes surfaces as
//! [`StorageError::Corrupt`]; readers that gate access treat it as absent.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

/// Storage key holding the current user.
pub const SESSION_KEY: &str = "currentUser";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("stored session is corrupt: {0}")]
    Corrupt(String),
}

impl ErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "E_STORAGE_UNAVAILABLE",
            Self::Write(_) => "E_STORAGE_WRITE",
            Self::Corrupt(_) => "E_STORAGE_CORRUPT",
        }
    }
}

/// String key-value store with page-lifetime persistence.
pub trait KeyValueStore {
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the value cannot be stored.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the key cannot be removed.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process store; contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Proof of a completed login in this tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    pub email: String,
}

fn null_as_empty<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

pub struct SessionStore<K> {
    store: K,
}

impl<K: KeyValueStore> SessionStore<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    pub fn backend(&self) -> &K {
        &self.store
    }

    /// Read the current record, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Corrupt`] if the stored value is not a record,
    /// or any error from the backing store.
    pub fn current(&self) -> Result<Option<SessionRecord>, StorageError> {
        let Some(raw) = self.store.get(SESSION_KEY)? else {
            return Ok(None);
        };
        // `null` is what a JSON round-trip of a missing value looks like.
        if raw.trim() == "null" {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    /// Replace the current record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the store rejects the value.
    pub fn save(&self, record: &SessionRecord) -> Result<(), StorageError> {
        let raw = serde_json::to_string(record).map_err(|e| StorageError::Write(e.to_string()))?;
        self.store.set(SESSION_KEY, &raw)
    }

    /// Drop the current record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the store rejects the removal.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(SESSION_KEY)
    }
}
