//! # Catalog State
//!
//! The vehicle catalog and the wishlist, shared by the listing, detail,
//! seller and dashboard views.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog State Operations                             │
//! │                                                                         │
//! │  View Action              Command                 State Change          │
//! │  ───────────              ───────                 ────────────          │
//! │                                                                         │
//! │  Change filters ─────────► search_vehicles() ───► (read only)          │
//! │                                                                         │
//! │  Publish listing ────────► add_vehicle() ───────► vehicles.push(v)     │
//! │                                                                         │
//! │  Delete listing ─────────► delete_vehicle() ────► vehicles.remove(i)   │
//! │                                                                         │
//! │  Click heart ────────────► toggle_wishlist() ───► ids toggled + saved  │
//! │                                                                         │
//! │  NOTE: The std mutexes are never held across an await. Toggles are      │
//! │        serialized by an async lock held through the storage write.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info, warn};

use rental_core::{
    CoreError, SortKey, Vehicle, VehicleCatalog, VehicleDraft, VehicleFilter, Wishlist,
    WishlistChange,
};
use rental_db::{Database, WishlistRepository};

use crate::error::ApiError;

/// Catalog plus wishlist, with the wishlist mirrored to local storage.
///
/// ## Thread Safety
/// Two independent `Arc<Mutex<_>>` so a long listing search never blocks
/// the heart button. `toggle_lock` admits one toggle at a time, so saved
/// snapshots land in the same order as the in-memory changes.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Mutex<VehicleCatalog>>,
    wishlist: Arc<Mutex<Wishlist>>,
    toggle_lock: Arc<tokio::sync::Mutex<()>>,
    store: WishlistRepository,
}

impl CatalogState {
    /// Builds the catalog from `vehicles` and restores the saved wishlist.
    ///
    /// An unreadable wishlist record is dropped and replaced by an empty one.
    pub async fn restore(vehicles: Vec<Vehicle>, db: &Database) -> Result<Self, ApiError> {
        let store = db.wishlist();

        let wishlist = match store.load().await {
            Ok(wishlist) => wishlist,
            Err(e) if e.is_corrupt_record() => {
                warn!(error = %e, "Discarding unreadable wishlist");
                store.clear().await?;
                Wishlist::new()
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            vehicles = vehicles.len(),
            wishlisted = wishlist.len(),
            "Catalog state restored"
        );

        Ok(CatalogState {
            catalog: Arc::new(Mutex::new(VehicleCatalog::with_vehicles(vehicles))),
            wishlist: Arc::new(Mutex::new(wishlist)),
            toggle_lock: Arc::new(tokio::sync::Mutex::new(())),
            store,
        })
    }

    /// Executes a function with read access to the catalog.
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&VehicleCatalog) -> R,
    {
        let catalog = self.catalog.lock().unwrap_or_else(PoisonError::into_inner);
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut VehicleCatalog) -> R,
    {
        let mut catalog = self.catalog.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut catalog)
    }

    fn with_wishlist<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Wishlist) -> R,
    {
        let wishlist = self.wishlist.lock().unwrap_or_else(PoisonError::into_inner);
        f(&wishlist)
    }

    fn with_wishlist_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Wishlist) -> R,
    {
        let mut wishlist = self.wishlist.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut wishlist)
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    pub fn list(&self) -> Vec<Vehicle> {
        self.with_catalog(|c| c.list().to_vec())
    }

    pub fn get(&self, id: &str) -> Option<Vehicle> {
        self.with_catalog(|c| c.get(id).cloned())
    }

    pub fn search(&self, filter: &VehicleFilter, sort: SortKey) -> Vec<Vehicle> {
        self.with_catalog(|c| c.search(filter, sort))
    }

    pub fn by_seller(&self, seller_id: &str) -> Vec<Vehicle> {
        self.with_catalog(|c| c.by_seller(seller_id))
    }

    pub fn add(&self, draft: VehicleDraft) -> Result<Vehicle, ApiError> {
        let vehicle = self.with_catalog_mut(|c| c.add(draft))?;
        info!(vehicle_id = %vehicle.id, seller_id = %vehicle.seller_id, "Listing added");
        Ok(vehicle)
    }

    /// Replaces the listing with the same id.
    pub fn update(&self, vehicle: Vehicle) -> Result<Vehicle, ApiError> {
        let id = vehicle.id.clone();
        let updated = self.with_catalog_mut(|c| c.update(vehicle.clone()))?;

        if !updated {
            return Err(CoreError::VehicleNotFound(id).into());
        }

        info!(vehicle_id = %id, "Listing updated");
        Ok(vehicle)
    }

    /// Removes the listing. Wishlists keep the id; it simply stops resolving.
    pub fn remove(&self, id: &str) -> Result<(), ApiError> {
        if !self.with_catalog_mut(|c| c.remove(id)) {
            return Err(CoreError::VehicleNotFound(id.to_string()).into());
        }

        info!(vehicle_id = %id, "Listing removed");
        Ok(())
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Adds or removes `vehicle_id` and persists the result.
    ///
    /// ## Behavior
    /// - Adding an id that is not in the catalog fails with `NOT_FOUND`
    /// - Removing always works, even for a deleted listing
    /// - If the write fails the wishlist goes back to what it was before
    ///   this call
    pub async fn toggle_wishlist(&self, vehicle_id: &str) -> Result<WishlistChange, ApiError> {
        let _toggling = self.toggle_lock.lock().await;

        let adding = !self.is_wishlisted(vehicle_id);
        if adding && !self.with_catalog(|c| c.contains(vehicle_id)) {
            return Err(CoreError::VehicleNotFound(vehicle_id.to_string()).into());
        }

        let (previous, change, snapshot) = self.with_wishlist_mut(|w| {
            let previous = w.clone();
            let change = w.toggle(vehicle_id);
            (previous, change, w.clone())
        });

        if let Err(e) = self.store.save(&snapshot).await {
            self.with_wishlist_mut(|w| *w = previous);
            return Err(e.into());
        }

        debug!(vehicle_id = %vehicle_id, ?change, "Wishlist toggled");
        Ok(change)
    }

    pub fn is_wishlisted(&self, vehicle_id: &str) -> bool {
        self.with_wishlist(|w| w.contains(vehicle_id))
    }

    pub fn wishlist_ids(&self) -> Vec<String> {
        self.with_wishlist(|w| w.ids().to_vec())
    }

    /// Wishlisted vehicles that still exist, in catalog order.
    pub fn wishlist_vehicles(&self) -> Vec<Vehicle> {
        let wishlist = self.with_wishlist(Wishlist::clone);
        self.with_catalog(|c| wishlist.vehicles(c))
    }
}
