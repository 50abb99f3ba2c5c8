//! # Session Record Repository
//!
//! The logged-in user, stored under `auth_user` so a restart keeps the
//! session. The record never contains a password.

use rental_core::{User, SESSION_STORAGE_KEY};
use tracing::debug;

use crate::error::DbResult;
use crate::repository::local_storage::LocalStorageRepository;

/// Repository for the persisted session user.
#[derive(Debug, Clone)]
pub struct SessionRecordRepository {
    storage: LocalStorageRepository,
}

impl SessionRecordRepository {
    pub fn new(storage: LocalStorageRepository) -> Self {
        SessionRecordRepository { storage }
    }

    /// Reads the stored user.
    ///
    /// The record is trusted as-is: nothing checks it against the credential
    /// table. A record that does not decode comes back as
    /// `DbError::CorruptRecord`.
    pub async fn load(&self) -> DbResult<Option<User>> {
        self.storage.get_json(SESSION_STORAGE_KEY).await
    }

    pub async fn save(&self, user: &User) -> DbResult<()> {
        debug!(user_id = %user.id, "Persisting session user");
        self.storage.set_json(SESSION_STORAGE_KEY, user).await
    }

    /// Removes the record. Returns whether one existed.
    pub async fn clear(&self) -> DbResult<bool> {
        self.storage.remove(SESSION_STORAGE_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use rental_core::Role;

    fn jane() -> User {
        User {
            id: "3".to_string(),
            email: "user@carrental.com".to_string(),
            name: "Jane User".to_string(),
            role: Role::User,
            avatar: None,
            phone: None,
            verified: None,
        }
    }

    #[tokio::test]
    async fn test_save_load_clear() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.session_record();

        assert_eq!(repo.load().await.unwrap(), None);

        repo.save(&jane()).await.unwrap();
        assert_eq!(repo.load().await.unwrap(), Some(jane()));

        let raw = db.local_storage().get("auth_user").await.unwrap().unwrap();
        assert!(!raw.contains("password"));

        assert!(repo.clear().await.unwrap());
        assert_eq!(repo.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_record_is_reported() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.local_storage().set("auth_user", "{\"id\":").await.unwrap();

        let err = db.session_record().load().await.unwrap_err();
        assert!(err.is_corrupt_record());
    }
}
