use async_trait::async_trait;
use chrono::Utc;
use onboard_core::model::SessionKey;
use sqlx::Row;

use crate::repository::{SessionStore, StorageError};

use super::SqliteRepository;

#[async_trait]
impl SessionStore for SqliteRepository {
    async fn set_raw(&self, key: SessionKey, value: String) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO session_entries (session_id, key, value, updated_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(session_id, key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(self.session_id.to_string())
        .bind(key.as_str())
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn get_raw(&self, key: SessionKey) -> Result<Option<String>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT value
            FROM session_entries
            WHERE session_id = ?1 AND key = ?2
            ",
        )
        .bind(self.session_id.to_string())
        .bind(key.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let value: String = row
            .try_get("value")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(value))
    }

    async fn remove(&self, key: SessionKey) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM session_entries WHERE session_id = ?1 AND key = ?2")
            .bind(self.session_id.to_string())
            .bind(key.as_str())
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM session_entries WHERE session_id = ?1")
            .bind(self.session_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }
}
