use async_trait::async_trait;
use onboard_core::model::SessionKey;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Session-scoped text store shared by every screen of one browsing session.
///
/// Values are opaque text here; `SessionStorage` layers JSON on top. Writes are
/// last-write-wins and only one writer is expected per session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Write a value, replacing whatever was stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend rejects the write.
    async fn set_raw(&self, key: SessionKey, value: String) -> Result<(), StorageError>;

    /// Read the value under `key`, or `None` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_raw(&self, key: SessionKey) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the backend rejects the delete.
    async fn remove(&self, key: SessionKey) -> Result<(), StorageError>;

    /// Drop every value of the current session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend rejects the delete.
    async fn clear(&self) -> Result<(), StorageError>;
}

/// Process-memory store; its lifetime is the lifetime of the app window.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    entries: Arc<Mutex<HashMap<SessionKey, String>>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn set_raw(&self, key: SessionKey, value: String) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key, value);
        Ok(())
    }

    async fn get_raw(&self, key: SessionKey) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&key).cloned())
    }

    async fn remove(&self, key: SessionKey) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(&key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.clear();
        Ok(())
    }
}

/// Aggregates storage backends behind trait objects for easy swapping.
#[derive(Clone)]
pub struct Storage {
    pub session: Arc<dyn SessionStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let session: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        Self { session }
    }
}
