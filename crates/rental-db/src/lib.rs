//! # rental-db: Local Storage Layer for the Rental Storefront
//!
//! This crate persists the handful of records the storefront keeps between
//! runs. It uses SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Rental Storefront Data Flow                         │
//! │                                                                         │
//! │  SessionState::login / CatalogState::toggle_wishlist                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    rental-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌────────────┐  │   │
//! │  │   │   Database    │    │   Repositories     │  │ Migrations │  │   │
//! │  │   │   (pool.rs)   │    │                    │  │ (embedded) │  │   │
//! │  │   │               │    │ LocalStorageRepo   │  │            │  │   │
//! │  │   │ SqlitePool    │◄───│ SessionRecordRepo  │  │ 001_local_ │  │   │
//! │  │   │               │    │ WishlistRepo       │  │ storage    │  │   │
//! │  │   └───────────────┘    └────────────────────┘  └────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   local_storage(key, value, updated_at)                         │   │
//! │  │     auth_user → {"id":"3","email":"user@carrental.com",...}     │   │
//! │  │     wishlist  → ["4","9"]                                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Opening storage (file or in-memory) and repository handles
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Key-value storage and the typed records on top of it
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rental_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/storefront.db")).await?;
//!
//! let user = db.session_record().load().await?;
//! let wishlist = db.wishlist().load().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig, StorageLocation};

// Repository re-exports for convenience
pub use repository::local_storage::LocalStorageRepository;
pub use repository::session::SessionRecordRepository;
pub use repository::wishlist::WishlistRepository;
