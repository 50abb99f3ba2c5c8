//! # Repository Module
//!
//! Storage repositories for the storefront.
//!
//! ## Layering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  SessionRecordRepository   WishlistRepository     ← typed records       │
//! │   load() -> Option<User>    load() -> Wishlist                          │
//! │   save(&User) / clear()     save(&Wishlist)                             │
//! │            │                        │                                   │
//! │            └──────────┬─────────────┘                                   │
//! │                       ▼                                                 │
//! │              LocalStorageRepository               ← key → JSON text     │
//! │               get / set / remove / get_json / set_json                  │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │              local_storage table                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`local_storage::LocalStorageRepository`] - Raw key-value records
//! - [`session::SessionRecordRepository`] - The `auth_user` record
//! - [`wishlist::WishlistRepository`] - The `wishlist` record

pub mod local_storage;
pub mod session;
pub mod wishlist;
