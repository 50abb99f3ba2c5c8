//! # Catalog Module
//!
//! The vehicle catalog and the session wishlist.
//!
//! ## Listing Page Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Operations                                  │
//! │                                                                         │
//! │  all vehicles ──► filter(VehicleFilter) ──► sort(SortKey) ──► cards     │
//! │                   (order-preserving)        (stable)                    │
//! │                                                                         │
//! │  Seller dashboard ───────► add / update / remove / by_seller            │
//! │  Detail page ────────────► get(id)                                      │
//! │  Heart button ───────────► Wishlist::toggle(id)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{FuelType, Transmission, Vehicle, VehicleCategory, VehicleDraft};
use crate::validation::validate_vehicle_draft;

// =============================================================================
// Filter Criteria
// =============================================================================

/// Listing page filter state. `None` passes everything through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleFilter {
    /// Case-insensitive substring of the vehicle's city.
    pub location: Option<String>,
    pub category: Option<VehicleCategory>,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    /// Inclusive lower bound on the daily price.
    pub min_price: Option<Money>,
    /// Inclusive upper bound on the daily price.
    pub max_price: Option<Money>,
}

impl VehicleFilter {
    /// Checks a single vehicle against every set criterion.
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        if let Some(location) = self.location.as_deref().map(str::trim) {
            if !location.is_empty()
                && !vehicle
                    .location
                    .to_lowercase()
                    .contains(&location.to_lowercase())
            {
                return false;
            }
        }

        if self.category.is_some_and(|c| c != vehicle.category) {
            return false;
        }
        if self.fuel_type.is_some_and(|f| f != vehicle.fuel_type) {
            return false;
        }
        if self.transmission.is_some_and(|t| t != vehicle.transmission) {
            return false;
        }
        if self.min_price.is_some_and(|min| vehicle.price_per_day < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| vehicle.price_per_day > max) {
            return false;
        }

        true
    }

    /// True when no criterion is set ("Clear all").
    pub fn is_empty(&self) -> bool {
        *self == VehicleFilter::default()
    }
}

// =============================================================================
// Sort Keys
// =============================================================================

/// Listing page sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SortKey {
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    #[serde(rename = "price-high")]
    PriceHighToLow,
    /// Highest rated first.
    #[serde(rename = "rating")]
    Rating,
    /// Most reviewed first.
    #[default]
    #[serde(rename = "popularity")]
    Popularity,
}

impl SortKey {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceLowToHigh => "price-low",
            SortKey::PriceHighToLow => "price-high",
            SortKey::Rating => "rating",
            SortKey::Popularity => "popularity",
        }
    }

    /// Sorts in place. `sort_by` is stable, so ties keep catalog order.
    pub fn apply(&self, vehicles: &mut [Vehicle]) {
        match self {
            SortKey::PriceLowToHigh => vehicles.sort_by(|a, b| a.price_per_day.cmp(&b.price_per_day)),
            SortKey::PriceHighToLow => vehicles.sort_by(|a, b| b.price_per_day.cmp(&a.price_per_day)),
            SortKey::Rating => vehicles.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortKey::Popularity => vehicles.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
        }
    }
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "price-low" => Ok(SortKey::PriceLowToHigh),
            "price-high" => Ok(SortKey::PriceHighToLow),
            "rating" => Ok(SortKey::Rating),
            "popularity" => Ok(SortKey::Popularity),
            _ => Err(ValidationError::NotAllowed {
                field: "sortBy".to_string(),
                allowed: ["price-low", "price-high", "rating", "popularity"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            }),
        }
    }
}

// =============================================================================
// Vehicle Catalog
// =============================================================================

/// The in-memory set of vehicle listings, in insertion order.
///
/// ## Invariants
/// - Ids are unique (seed ids are "1".."20", new listings get a UUID v4)
/// - `list()` order is insertion order; removal keeps the relative order
#[derive(Debug, Clone, Default)]
pub struct VehicleCatalog {
    vehicles: Vec<Vehicle>,
}

impl VehicleCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        VehicleCatalog::default()
    }

    /// Creates a catalog holding `vehicles` in the given order.
    pub fn with_vehicles(vehicles: Vec<Vehicle>) -> Self {
        VehicleCatalog { vehicles }
    }

    pub fn list(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Detail lookup. `None` renders the "not found" view.
    pub fn get(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Returns the vehicles matching `filter`, in catalog order.
    pub fn filter(&self, filter: &VehicleFilter) -> Vec<Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| filter.matches(v))
            .cloned()
            .collect()
    }

    /// Sorts an already-filtered slice.
    pub fn sort(vehicles: &mut [Vehicle], key: SortKey) {
        key.apply(vehicles);
    }

    /// Filter, then sort: exactly what the listing page renders.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::catalog::{SortKey, VehicleCatalog, VehicleFilter};
    /// use rental_core::seed;
    ///
    /// let catalog = VehicleCatalog::with_vehicles(seed::mock_vehicles());
    /// let filter = VehicleFilter {
    ///     location: Some("miami".to_string()),
    ///     ..VehicleFilter::default()
    /// };
    ///
    /// let names: Vec<_> = catalog
    ///     .search(&filter, SortKey::PriceHighToLow)
    ///     .into_iter()
    ///     .map(|v| v.name)
    ///     .collect();
    /// assert_eq!(
    ///     names,
    ///     ["Chevrolet Corvette 2023", "Audi Q7 2023", "Harley Davidson Street 750"]
    /// );
    /// ```
    pub fn search(&self, filter: &VehicleFilter, key: SortKey) -> Vec<Vehicle> {
        let mut found = self.filter(filter);
        key.apply(&mut found);
        found
    }

    /// Validates and appends a new listing under a fresh UUID.
    pub fn add(&mut self, draft: VehicleDraft) -> CoreResult<Vehicle> {
        validate_vehicle_draft(&draft)?;

        let vehicle = draft.into_vehicle(Uuid::new_v4().to_string());
        tracing::debug!(vehicle_id = %vehicle.id, name = %vehicle.name, "Listing added");
        self.vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    /// Replaces the listing with the same id.
    ///
    /// ## Returns
    /// - `Ok(true)` when a listing was replaced
    /// - `Ok(false)` when no listing has that id (nothing changes)
    pub fn update(&mut self, vehicle: Vehicle) -> CoreResult<bool> {
        validate_vehicle_draft(&VehicleDraft::from(vehicle.clone()))?;

        match self.vehicles.iter_mut().find(|v| v.id == vehicle.id) {
            Some(slot) => {
                *slot = vehicle;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Deletes a listing. Bookings and wishlist entries that point at it are
    /// left as they are.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.vehicles.len();
        self.vehicles.retain(|v| v.id != id);
        self.vehicles.len() != before
    }

    /// Listings owned by one seller, in catalog order.
    pub fn by_seller(&self, seller_id: &str) -> Vec<Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| v.seller_id == seller_id)
            .cloned()
            .collect()
    }
}

// =============================================================================
// Wishlist
// =============================================================================

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum WishlistChange {
    Added,
    Removed,
}

/// Ordered set of wishlisted vehicle ids.
///
/// Serializes as a plain JSON array, which is the stored `wishlist` record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Wishlist {
    ids: Vec<String>,
}

impl Wishlist {
    pub fn new() -> Self {
        Wishlist::default()
    }

    /// Builds a wishlist from stored ids, dropping duplicates.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut wishlist = Wishlist::new();
        for id in ids {
            let id = id.into();
            if !wishlist.contains(&id) {
                wishlist.ids.push(id);
            }
        }
        wishlist
    }

    /// Adds the id if absent, removes it if present.
    pub fn toggle(&mut self, id: &str) -> WishlistChange {
        if let Some(pos) = self.ids.iter().position(|i| i == id) {
            self.ids.remove(pos);
            WishlistChange::Removed
        } else {
            self.ids.push(id.to_string());
            WishlistChange::Added
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The wishlisted vehicles in catalog order. Ids that no longer resolve
    /// are skipped.
    pub fn vehicles(&self, catalog: &VehicleCatalog) -> Vec<Vehicle> {
        catalog
            .list()
            .iter()
            .filter(|v| self.contains(&v.id))
            .cloned()
            .collect()
    }
}

impl From<Vec<String>> for Wishlist {
    fn from(ids: Vec<String>) -> Self {
        Wishlist::from_ids(ids)
    }
}

impl From<Wishlist> for Vec<String> {
    fn from(wishlist: Wishlist) -> Self {
        wishlist.ids
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn catalog() -> VehicleCatalog {
        VehicleCatalog::with_vehicles(seed::mock_vehicles())
    }

    fn ids(vehicles: &[Vehicle]) -> Vec<&str> {
        vehicles.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let catalog = catalog();
        let all = catalog.filter(&VehicleFilter::default());
        assert_eq!(all.len(), 20);
        assert_eq!(ids(&all), ids(catalog.list()));
    }

    #[test]
    fn test_filter_is_order_preserving_subset() {
        let catalog = catalog();
        let filter = VehicleFilter {
            transmission: Some(Transmission::Manual),
            min_price: Some(Money::from_major(60)),
            ..VehicleFilter::default()
        };
        let found = catalog.filter(&filter);

        assert!(!found.is_empty());
        assert!(found.iter().all(|v| filter.matches(v)));

        let positions: Vec<usize> = found
            .iter()
            .map(|v| catalog.list().iter().position(|c| c.id == v.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_location_filter_is_case_insensitive_substring() {
        let filter = VehicleFilter {
            location: Some("LOS".to_string()),
            ..VehicleFilter::default()
        };
        let found = catalog().filter(&filter);
        assert_eq!(ids(&found), vec!["2", "8", "13"]);
    }

    #[test]
    fn test_blank_location_passes_everything() {
        let filter = VehicleFilter {
            location: Some("  ".to_string()),
            ..VehicleFilter::default()
        };
        assert_eq!(catalog().filter(&filter).len(), 20);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let filter = VehicleFilter {
            min_price: Some(Money::from_major(85)),
            max_price: Some(Money::from_major(90)),
            ..VehicleFilter::default()
        };
        let found = catalog().filter(&filter);
        assert_eq!(ids(&found), vec!["7", "14", "16", "17"]);
    }

    #[test]
    fn test_price_sorts_are_reverses_without_ties() {
        let filter = VehicleFilter {
            category: Some(VehicleCategory::Car),
            ..VehicleFilter::default()
        };
        let catalog = catalog();
        let low = catalog.search(&filter, SortKey::PriceLowToHigh);
        let mut high = catalog.search(&filter, SortKey::PriceHighToLow);
        high.reverse();
        assert_eq!(ids(&low), ids(&high));
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        // Porsche (13) and Tesla (5) and Corvette (10) all rate 4.9
        let mut vehicles = catalog().list().to_vec();
        VehicleCatalog::sort(&mut vehicles, SortKey::Rating);
        assert_eq!(ids(&vehicles[..3]), vec!["5", "10", "13"]);
    }

    #[test]
    fn test_default_sort_is_popularity() {
        let found = catalog().search(&VehicleFilter::default(), SortKey::default());
        assert_eq!(found[0].id, "5");
        assert!(found.windows(2).all(|w| w[0].reviews >= w[1].reviews));
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("price-low".parse::<SortKey>(), Ok(SortKey::PriceLowToHigh));
        assert_eq!("popularity".parse::<SortKey>(), Ok(SortKey::Popularity));
        assert!("cheapest".parse::<SortKey>().is_err());
        assert_eq!(SortKey::PriceHighToLow.as_str(), "price-high");
    }

    #[test]
    fn test_add_assigns_fresh_id() {
        let mut catalog = catalog();
        let draft = VehicleDraft::from(catalog.list()[0].clone());

        let first = catalog.add(draft.clone()).unwrap();
        let second = catalog.add(draft).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(catalog.len(), 22);
        assert_eq!(catalog.list().last().map(|v| v.id.as_str()), Some(second.id.as_str()));
    }

    #[test]
    fn test_add_rejects_invalid_draft() {
        let mut catalog = catalog();
        let mut draft = VehicleDraft::from(catalog.list()[0].clone());
        draft.name = String::new();
        assert!(catalog.add(draft).is_err());
        assert_eq!(catalog.len(), 20);
    }

    #[test]
    fn test_update_and_remove() {
        let mut catalog = catalog();

        let mut camry = catalog.get("1").cloned().unwrap();
        camry.price_per_day = Money::from_major(50);
        assert!(catalog.update(camry).unwrap());
        assert_eq!(catalog.get("1").unwrap().price_per_day, Money::from_major(50));

        let mut ghost = catalog.get("2").cloned().unwrap();
        ghost.id = "missing".to_string();
        assert!(!catalog.update(ghost).unwrap());

        assert!(catalog.remove("1"));
        assert!(!catalog.remove("1"));
        assert!(catalog.get("1").is_none());
        assert_eq!(catalog.list()[0].id, "2");
    }

    #[test]
    fn test_by_seller() {
        let catalog = catalog();
        assert_eq!(catalog.by_seller(seed::SEED_SELLER_ID).len(), 20);
        assert!(catalog.by_seller("3").is_empty());
    }

    #[test]
    fn test_wishlist_toggle_twice_restores() {
        let mut wishlist = Wishlist::from_ids(["4"]);
        let before = wishlist.clone();

        assert_eq!(wishlist.toggle("7"), WishlistChange::Added);
        assert!(wishlist.contains("7"));
        assert_eq!(wishlist.toggle("7"), WishlistChange::Removed);

        assert_eq!(wishlist, before);
    }

    #[test]
    fn test_wishlist_dedups_and_serializes_as_array() {
        let wishlist = Wishlist::from_ids(["1", "2", "1"]);
        assert_eq!(wishlist.len(), 2);
        assert_eq!(serde_json::to_string(&wishlist).unwrap(), r#"["1","2"]"#);

        let parsed: Wishlist = serde_json::from_str(r#"["3","3","5"]"#).unwrap();
        assert_eq!(parsed.ids(), ["3", "5"]);
    }

    #[test]
    fn test_wishlist_vehicles_skip_dangling_ids() {
        let mut catalog = catalog();
        let wishlist = Wishlist::from_ids(["12", "2", "9"]);
        catalog.remove("2");

        let vehicles = wishlist.vehicles(&catalog);
        assert_eq!(ids(&vehicles), vec!["9", "12"]);
    }
}
