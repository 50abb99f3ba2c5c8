//! # Local Storage Repository
//!
//! A string-keyed store of JSON text, the storefront's equivalent of the
//! browser's `localStorage`.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

/// Repository for raw key-value records.
#[derive(Debug, Clone)]
pub struct LocalStorageRepository {
    pool: SqlitePool,
}

impl LocalStorageRepository {
    /// Creates a new LocalStorageRepository.
    pub fn new(pool: SqlitePool) -> Self {
        LocalStorageRepository { pool }
    }

    /// Reads the value stored under `key`.
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM local_storage WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value)
    }

    /// Writes `value` under `key`, replacing any previous value.
    pub async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        let now = Utc::now().to_rfc3339();

        debug!(key = %key, bytes = value.len(), "Writing local storage record");

        sqlx::query(
            r#"
            INSERT INTO local_storage (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes the record. Returns whether one existed.
    pub async fn remove(&self, key: &str) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM local_storage WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        debug!(key = %key, removed = result.rows_affected() > 0, "Removed local storage record");
        Ok(result.rows_affected() > 0)
    }

    /// All stored keys, sorted.
    pub async fn keys(&self) -> DbResult<Vec<String>> {
        let keys = sqlx::query_scalar::<_, String>("SELECT key FROM local_storage ORDER BY key")
            .fetch_all(&self.pool)
            .await?;

        Ok(keys)
    }

    /// Reads and decodes a JSON record.
    ///
    /// ## Returns
    /// * `Ok(None)` - nothing stored under `key`
    /// * `Err(DbError::CorruptRecord)` - stored text does not decode as `T`
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> DbResult<Option<T>> {
        match self.get(key).await? {
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|e| DbError::corrupt(key, e)),
            None => Ok(None),
        }
    }

    /// Encodes `value` as JSON and stores it under `key`.
    pub async fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> DbResult<()> {
        let text = serde_json::to_string(value).map_err(|source| DbError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.set(key, &text).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    async fn repo() -> LocalStorageRepository {
        Database::new(DbConfig::in_memory())
            .await
            .unwrap()
            .local_storage()
    }

    #[tokio::test]
    async fn test_set_get_overwrite_remove() {
        let repo = repo().await;
        assert_eq!(repo.get("theme").await.unwrap(), None);

        repo.set("theme", "dark").await.unwrap();
        repo.set("theme", "light").await.unwrap();
        assert_eq!(repo.get("theme").await.unwrap().as_deref(), Some("light"));

        assert!(repo.remove("theme").await.unwrap());
        assert!(!repo.remove("theme").await.unwrap());
        assert_eq!(repo.get("theme").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_keys_are_sorted() {
        let repo = repo().await;
        repo.set("wishlist", "[]").await.unwrap();
        repo.set("auth_user", "{}").await.unwrap();

        assert_eq!(repo.keys().await.unwrap(), vec!["auth_user", "wishlist"]);
    }

    #[tokio::test]
    async fn test_json_helpers() {
        let repo = repo().await;

        repo.set_json("ids", &vec!["1", "2"]).await.unwrap();
        let ids: Option<Vec<String>> = repo.get_json("ids").await.unwrap();
        assert_eq!(ids, Some(vec!["1".to_string(), "2".to_string()]));

        let missing: Option<Vec<String>> = repo.get_json("nothing").await.unwrap();
        assert!(missing.is_none());

        repo.set("ids", "not json").await.unwrap();
        let err = repo.get_json::<Vec<String>>("ids").await.unwrap_err();
        assert!(err.is_corrupt_record());
    }
}
