use std::sync::Arc;
use std::time::Duration;

use onboard_core::model::SessionId;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use thiserror::Error;

use crate::repository::{SessionStore, Storage};

mod migrate;
mod session_repo;

/// SQLite-backed session store. Rows are namespaced by the owning `SessionId`.
#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
    session_id: SessionId,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SqliteInitError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl SqliteRepository {
    /// Connect to `SQLite` using the given URL.
    ///
    /// Connections are never recycled so a shared in-memory database
    /// (`sqlite:file:name?mode=memory&cache=shared`) lives as long as the pool.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if the connection cannot be established.
    pub async fn connect(
        database_url: &str,
        session_id: SessionId,
    ) -> Result<Self, SqliteInitError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .acquire_timeout(Duration::from_secs(5))
            .after_connect(|conn, _meta| {
                Box::pin(async move {
                    sqlx::query("PRAGMA journal_mode = WAL;")
                        .execute(&mut *conn)
                        .await?;
                    sqlx::query("PRAGMA busy_timeout = 5000;")
                        .execute(&mut *conn)
                        .await?;
                    Ok(())
                })
            })
            .connect(database_url)
            .await?;
        Ok(Self { pool, session_id })
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Create tables if they do not exist.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if migration queries fail.
    pub async fn migrate(&self) -> Result<(), SqliteInitError> {
        migrate::run_migrations(&self.pool).await
    }

    /// Delete rows left behind by earlier sessions in a file-backed database.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if the delete fails.
    pub async fn purge_other_sessions(&self) -> Result<u64, SqliteInitError> {
        let result = sqlx::query("DELETE FROM session_entries WHERE session_id <> ?1")
            .bind(self.session_id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

impl Storage {
    /// Build a `Storage` backed by `SQLite` for one browsing session.
    ///
    /// Entries from earlier sessions are purged on open.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if connection, migrations or the purge fail.
    pub async fn sqlite(
        database_url: &str,
        session_id: SessionId,
    ) -> Result<Self, SqliteInitError> {
        let repo = SqliteRepository::connect(database_url, session_id).await?;
        repo.migrate().await?;
        let purged = repo.purge_other_sessions().await?;
        if purged > 0 {
            tracing::info!(purged, %session_id, "dropped stale session entries");
        }
        let session: Arc<dyn SessionStore> = Arc::new(repo);
        Ok(Self { session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqliteRepository>();
    }
}
