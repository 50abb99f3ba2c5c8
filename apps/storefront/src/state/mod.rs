//! # State Module
//!
//! The state containers behind the storefront views.
//!
//! ## Why Multiple State Types?
//! Instead of one struct holding everything behind one lock, each concern
//! gets its own container:
//!
//! 1. **Clearer Command Signatures**: Commands take exactly the state they need
//! 2. **Easier Testing**: Each container can be built alone over an in-memory database
//! 3. **Reduced Contention**: A catalog search never waits on a login
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  AppState (lib.rs)                              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │            ┌─────────────────┼─────────────────┐                        │
//! │            ▼                 ▼                 ▼                        │
//! │    ┌──────────────┐  ┌──────────────┐  ┌──────────────┐                 │
//! │    │ CatalogState │  │ BookingState │  │ SessionState │                 │
//! │    │              │  │              │  │              │                 │
//! │    │ catalog +    │  │ Arc<Mutex<   │  │ Arc<Mutex<   │                 │
//! │    │ wishlist     │  │   Ledger>>   │  │   Session>>  │                 │
//! │    └──────────────┘  └──────────────┘  └──────────────┘                 │
//! │                                                                         │
//! │  StorefrontConfig: read-only after startup                             │
//! │  Database: held by AppState for shutdown; containers keep repositories │
//! │  Persisted: wishlist (CatalogState), auth_user (SessionState)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod booking;
mod catalog;
mod config;
mod session;

pub use booking::BookingState;
pub use catalog::CatalogState;
pub use config::{ConfigError, StorefrontConfig};
pub use session::SessionState;
