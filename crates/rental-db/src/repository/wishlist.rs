//! # Wishlist Repository
//!
//! The wishlist, stored under `wishlist` as a JSON array of vehicle ids.

use rental_core::{Wishlist, WISHLIST_STORAGE_KEY};
use tracing::debug;

use crate::error::DbResult;
use crate::repository::local_storage::LocalStorageRepository;

/// Repository for the persisted wishlist.
#[derive(Debug, Clone)]
pub struct WishlistRepository {
    storage: LocalStorageRepository,
}

impl WishlistRepository {
    pub fn new(storage: LocalStorageRepository) -> Self {
        WishlistRepository { storage }
    }

    /// Reads the stored wishlist. A missing record is an empty wishlist.
    pub async fn load(&self) -> DbResult<Wishlist> {
        Ok(self
            .storage
            .get_json::<Wishlist>(WISHLIST_STORAGE_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Replaces the stored id list.
    pub async fn save(&self, wishlist: &Wishlist) -> DbResult<()> {
        debug!(count = wishlist.len(), "Persisting wishlist");
        self.storage.set_json(WISHLIST_STORAGE_KEY, wishlist).await
    }

    pub async fn clear(&self) -> DbResult<bool> {
        self.storage.remove(WISHLIST_STORAGE_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};
    use rental_core::Wishlist;

    #[tokio::test]
    async fn test_missing_record_is_empty() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(db.wishlist().load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_keeps_order() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.wishlist();

        repo.save(&Wishlist::from_ids(["9", "4", "12"])).await.unwrap();

        let raw = db.local_storage().get("wishlist").await.unwrap();
        assert_eq!(raw.as_deref(), Some(r#"["9","4","12"]"#));
        assert_eq!(repo.load().await.unwrap().ids(), ["9", "4", "12"]);

        assert!(repo.clear().await.unwrap());
        assert!(repo.load().await.unwrap().is_empty());
    }
}
