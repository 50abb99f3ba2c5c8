//! # Database Error Types
//!
//! Failures of the local storage layer.
//!
//! ## Where They Come From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Database::new ─────► Open / Schema        (startup only)              │
//! │                                                                         │
//! │  LocalStorageRepository                                                 │
//! │    get / set / remove ─► Query / Closed                                │
//! │    get_json ───────────► CorruptRecord     (clearing the key fixes it) │
//! │    set_json ───────────► Encode                                        │
//! │                                                                         │
//! │  The storefront turns every variant into an ApiError and logs the      │
//! │  detail; the view never sees SQL text.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Local storage errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// The database file could not be opened or created.
    ///
    /// ## When This Occurs
    /// - The data directory is read-only
    /// - The path points at something that is not a SQLite file
    #[error("Cannot open local storage at {path}: {reason}")]
    Open { path: String, reason: String },

    /// The embedded schema could not be applied.
    #[error("Schema upgrade failed: {0}")]
    Schema(#[from] sqlx::migrate::MigrateError),

    /// The handle was closed, usually during shutdown.
    #[error("Local storage is closed")]
    Closed,

    /// A statement against `local_storage` failed.
    #[error("Storage query failed: {0}")]
    Query(String),

    /// A stored value is not valid JSON for its record type.
    ///
    /// ## When This Occurs
    /// - The record was written by an older build with a different shape
    /// - The row was edited by hand
    #[error("Stored record '{key}' is corrupt: {reason}")]
    CorruptRecord { key: String, reason: String },

    /// A record could not be encoded for storage.
    #[error("Cannot encode record '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DbError {
    pub fn corrupt(key: impl Into<String>, reason: impl ToString) -> Self {
        DbError::CorruptRecord {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// True for errors that clearing the record fixes.
    pub fn is_corrupt_record(&self) -> bool {
        matches!(self, DbError::CorruptRecord { .. })
    }
}

/// ```text
/// sqlx::Error::PoolClosed   → DbError::Closed
/// sqlx::Error::Database     → DbError::Query (driver message only)
/// anything else             → DbError::Query
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolClosed => DbError::Closed,
            sqlx::Error::Database(db_err) => DbError::Query(db_err.message().to_string()),
            other => DbError::Query(other.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
