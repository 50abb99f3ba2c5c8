//! # Database Pool Management
//!
//! Opens the storefront's SQLite file and hands out repository handles.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  StorefrontConfig::resolve_database_path()                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(path)          DbConfig::in_memory()   (tests)           │
//! │       │                              │                                  │
//! │       └──────────────┬───────────────┘                                  │
//! │                      ▼                                                  │
//! │  Database::new(config) ── open ── apply schema ──► Database             │
//! │                                                        │                │
//! │          ┌─────────────────────┬───────────────────────┤                │
//! │          ▼                     ▼                       ▼                │
//! │   local_storage()       session_record()          wishlist()            │
//! │                                                                         │
//! │  Database::close() on shutdown; later calls fail with DbError::Closed  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## WAL Mode
//! File databases use WAL so a wishlist read never waits on a session write.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::local_storage::LocalStorageRepository;
use crate::repository::session::SessionRecordRepository;
use crate::repository::wishlist::WishlistRepository;

/// How long a statement waits on SQLite's file lock before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Connections for a file database. Only a few records are ever touched.
const FILE_CONNECTIONS: u32 = 4;

// =============================================================================
// Configuration
// =============================================================================

/// Where local storage lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    /// A database file, created on first use.
    File(PathBuf),
    /// A private in-memory database that lasts as long as its `Database`.
    Memory,
}

/// Database configuration.
///
/// ## Example
/// ```rust
/// use rental_db::{DbConfig, StorageLocation};
///
/// let config = DbConfig::new("/tmp/storefront.db");
/// assert_eq!(config.location, StorageLocation::File("/tmp/storefront.db".into()));
/// assert_eq!(DbConfig::in_memory().location, StorageLocation::Memory);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub location: StorageLocation,
}

impl DbConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            location: StorageLocation::File(path.into()),
        }
    }

    /// In-memory storage for tests.
    ///
    /// Every clone of the resulting `Database` shares the one connection, so
    /// a restart can be simulated by building new state on the same handle.
    pub fn in_memory() -> Self {
        DbConfig {
            location: StorageLocation::Memory,
        }
    }

    fn describe(&self) -> String {
        match &self.location {
            StorageLocation::File(path) => path.display().to_string(),
            StorageLocation::Memory => ":memory:".to_string(),
        }
    }

    fn connect_options(&self) -> SqliteConnectOptions {
        let options = SqliteConnectOptions::new().busy_timeout(BUSY_TIMEOUT);

        match &self.location {
            StorageLocation::File(path) => options
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal),
            // the default filename is `:memory:`, private to its connection
            StorageLocation::Memory => options,
        }
    }

    fn pool_options(&self) -> SqlitePoolOptions {
        match self.location {
            StorageLocation::File(_) => SqlitePoolOptions::new()
                .max_connections(FILE_CONNECTIONS)
                .min_connections(1),
            // the data dies with the connection, so it must never be recycled
            StorageLocation::Memory => SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None),
        }
    }
}

// =============================================================================
// Database
// =============================================================================

/// Handle to local storage.
///
/// Cloning is cheap (the pool is reference counted); every state container
/// that persists something holds its own clone.
#[derive(Debug, Clone)]
pub struct Database {
    pub(crate) pool: SqlitePool,
}

impl Database {
    /// Opens the configured storage and brings its schema up to date.
    ///
    /// ## Errors
    /// - `Open` when the file cannot be created or opened
    /// - `Schema` when a migration fails
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        let target = config.describe();
        info!(path = %target, "Opening local storage");

        let pool = config
            .pool_options()
            .connect_with(config.connect_options())
            .await
            .map_err(|e| DbError::Open {
                path: target.clone(),
                reason: e.to_string(),
            })?;

        debug!(path = %target, "Connection pool ready");

        migrations::run_migrations(&pool).await?;
        info!(path = %target, "Local storage ready");

        Ok(Database { pool })
    }

    /// Raw key-value access.
    pub fn local_storage(&self) -> LocalStorageRepository {
        LocalStorageRepository::new(self.pool.clone())
    }

    /// The persisted session user (`auth_user`).
    pub fn session_record(&self) -> SessionRecordRepository {
        SessionRecordRepository::new(self.local_storage())
    }

    /// The persisted wishlist (`wishlist`).
    pub fn wishlist(&self) -> WishlistRepository {
        WishlistRepository::new(self.local_storage())
    }

    /// Closes every connection. Repository calls fail afterwards.
    pub async fn close(&self) {
        info!("Closing local storage");
        self.pool.close().await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
