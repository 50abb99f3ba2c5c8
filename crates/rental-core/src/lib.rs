//! # rental-core: Pure Domain Logic for the Rental Storefront
//!
//! This crate holds the state containers behind the storefront views as pure,
//! synchronous code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Rental Storefront Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                         View Layer                              │   │
//! │  │   Home ──► Vehicles ──► VehicleDetail ──► Dashboard            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/storefront (state + commands)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rental-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │ catalog  │ │ booking  │ │ session  │ │ search / money / │  │   │
//! │  │   │ Wishlist │ │ Ledger   │ │ Creds    │ │ validation       │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO TIMERS • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              rental-db (local key-value storage)                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Vehicle, Booking, User, ...)
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//! - [`catalog`] - Vehicle catalog, filtering, sorting, wishlist
//! - [`booking`] - Booking ledger and price calculation
//! - [`session`] - Mock credential table and session state
//! - [`search`] - Search form <-> query string codec
//! - [`seed`] - The mock vehicle catalog
//!
//! ## Example Usage
//!
//! ```rust
//! use rental_core::catalog::{SortKey, VehicleCatalog, VehicleFilter};
//! use rental_core::seed;
//! use rental_core::types::VehicleCategory;
//!
//! let catalog = VehicleCatalog::with_vehicles(seed::mock_vehicles());
//! let filter = VehicleFilter {
//!     category: Some(VehicleCategory::Bike),
//!     ..VehicleFilter::default()
//! };
//!
//! let bikes = catalog.search(&filter, SortKey::PriceLowToHigh);
//! assert!(bikes.iter().all(|v| v.category == VehicleCategory::Bike));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod booking;
pub mod catalog;
pub mod error;
pub mod money;
pub mod search;
pub mod seed;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use booking::BookingLedger;
pub use catalog::{SortKey, VehicleCatalog, VehicleFilter, Wishlist, WishlistChange};
pub use error::{AuthError, CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use session::Session;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key of the persisted session user.
pub const SESSION_STORAGE_KEY: &str = "auth_user";

/// Storage key of the persisted wishlist id array.
pub const WISHLIST_STORAGE_KEY: &str = "wishlist";

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Highest price, in whole dollars, a listing may ask for any rate tier.
pub const MAX_LISTING_PRICE_DOLLARS: i64 = 1_000_000;
