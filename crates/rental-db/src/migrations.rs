//! # Database Migrations
//!
//! Embedded SQL migrations for the storefront's local storage.
//!
//! ## Adding New Migrations
//!
//! 1. Create a new file in `migrations/sqlite/` with the next sequence number
//! 2. Name format: `NNN_description.sql` (e.g., `002_add_recent_searches.sql`)
//! 3. **NEVER** modify existing migrations - always add new ones

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// ```text
/// migrations/sqlite/
/// └── 001_local_storage.sql   # key-value records
/// ```
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Applies pending migrations. Already-applied ones are skipped by checksum.
pub(crate) async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    debug!(known = MIGRATOR.migrations.len(), "Applying schema migrations");
    MIGRATOR.run(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};

    #[tokio::test]
    async fn test_reapplying_is_harmless() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.local_storage().set("wishlist", "[]").await.unwrap();

        super::run_migrations(&db.pool).await.unwrap();

        let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
            .fetch_one(&db.pool)
            .await
            .unwrap();
        assert_eq!(applied, 1);
        assert_eq!(db.local_storage().get("wishlist").await.unwrap().as_deref(), Some("[]"));
    }
}
