//! Typed JSON access over a [`SessionStore`].

use std::sync::Arc;

use onboard_core::model::SessionKey;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::repository::{SessionStore, StorageError};

#[derive(Clone)]
pub struct SessionStorage {
    store: Arc<dyn SessionStore>,
}

impl SessionStorage {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Serialize `value` to JSON and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if `value` cannot be encoded, or the
    /// backend error if the write fails.
    pub async fn set<T: Serialize + Sync>(
        &self,
        key: SessionKey,
        value: &T,
    ) -> Result<(), StorageError> {
        let raw =
            serde_json::to_string(value).map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.store.set_raw(key, raw).await
    }

    /// Read and parse the value under `key`.
    ///
    /// Text that does not parse as `T` is reported as absent, not as an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only when the backend itself fails.
    pub async fn get<T: DeserializeOwned>(&self, key: SessionKey) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.store.get_raw(key).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!(%key, error = %err, "unreadable session value treated as absent");
                Ok(None)
            }
        }
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    pub async fn contains(&self, key: SessionKey) -> Result<bool, StorageError> {
        Ok(self.store.get_raw(key).await?.is_some())
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    pub async fn remove(&self, key: SessionKey) -> Result<(), StorageError> {
        self.store.remove(key).await
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.store.clear().await
    }
}
