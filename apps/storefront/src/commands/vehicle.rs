//! # Vehicle Commands
//!
//! Listing page, detail page and seller listing management.
//!
//! ## Listing Page
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  /vehicles?location=miami&vehicleType=car&sortBy=price-low             │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  search_vehicles(query) ──► ListingQuery::parse                        │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                    catalog.search(filter, sort)                         │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  { query: {...}, vehicles: [...] }  ("N vehicles found")               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use rental_core::search::ListingQuery;
use rental_core::{Vehicle, VehicleDraft};

use crate::error::ApiError;
use crate::state::CatalogState;

/// Listing page response: the parsed query (to seed the filter sidebar) and
/// the matching vehicles.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub query: ListingQuery,
    pub vehicles: Vec<Vehicle>,
}

/// Every listing, in catalog order.
pub fn list_vehicles(catalog: &CatalogState) -> Vec<Vehicle> {
    debug!("list_vehicles command");
    catalog.list()
}

/// Filters and sorts from a listing page query string.
///
/// ## Arguments
/// * `query` - `?location=...&sortBy=...`, with or without the leading `?`
///   or `/vehicles` path. Unknown keys and bad values are ignored.
pub fn search_vehicles(catalog: &CatalogState, query: &str) -> ListingResponse {
    debug!(query = %query, "search_vehicles command");

    let query = ListingQuery::parse(query);
    let vehicles = catalog.search(&query.to_filter(), query.sort_key());

    ListingResponse { query, vehicles }
}

/// Detail page lookup.
pub fn get_vehicle(catalog: &CatalogState, vehicle_id: &str) -> Result<Vehicle, ApiError> {
    debug!(vehicle_id = %vehicle_id, "get_vehicle command");
    catalog
        .get(vehicle_id)
        .ok_or_else(|| ApiError::not_found("Vehicle", vehicle_id))
}

/// Publishes a new listing with a generated id.
pub fn add_vehicle(catalog: &CatalogState, draft: VehicleDraft) -> Result<Vehicle, ApiError> {
    debug!(name = %draft.name, "add_vehicle command");
    catalog.add(draft)
}

/// Replaces a listing wholesale.
pub fn update_vehicle(catalog: &CatalogState, vehicle: Vehicle) -> Result<Vehicle, ApiError> {
    debug!(vehicle_id = %vehicle.id, "update_vehicle command");
    catalog.update(vehicle)
}

pub fn delete_vehicle(catalog: &CatalogState, vehicle_id: &str) -> Result<(), ApiError> {
    debug!(vehicle_id = %vehicle_id, "delete_vehicle command");
    catalog.remove(vehicle_id)
}

/// A seller's own listings.
pub fn seller_vehicles(catalog: &CatalogState, seller_id: &str) -> Vec<Vehicle> {
    debug!(seller_id = %seller_id, "seller_vehicles command");
    catalog.by_seller(seller_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use rental_core::seed;
    use rental_db::{Database, DbConfig};

    async fn catalog() -> CatalogState {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        CatalogState::restore(seed::mock_vehicles(), &db).await.unwrap()
    }

    #[tokio::test]
    async fn test_search_from_query_string() {
        let catalog = catalog().await;

        let response = search_vehicles(&catalog, "/vehicles?location=miami&sortBy=price-high");
        let names: Vec<&str> = response.vehicles.iter().map(|v| v.name.as_str()).collect();

        assert_eq!(response.query.location.as_deref(), Some("miami"));
        assert_eq!(names.len(), 3);
        assert!(names[0].starts_with("Chevrolet Corvette"));
    }

    #[tokio::test]
    async fn test_get_missing_vehicle() {
        let catalog = catalog().await;
        assert_eq!(get_vehicle(&catalog, "1").unwrap().id, "1");

        let err = get_vehicle(&catalog, "404").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_seller_listing_lifecycle() {
        let catalog = catalog().await;
        let before = seller_vehicles(&catalog, "2").len();

        let mut draft = VehicleDraft::from(get_vehicle(&catalog, "1").unwrap());
        draft.name = "Toyota Camry 2024".to_string();
        let added = add_vehicle(&catalog, draft).unwrap();

        assert_eq!(seller_vehicles(&catalog, "2").len(), before + 1);
        assert_eq!(list_vehicles(&catalog).last().map(|v| v.id.clone()), Some(added.id.clone()));

        delete_vehicle(&catalog, &added.id).unwrap();
        assert_eq!(seller_vehicles(&catalog, "2").len(), before);
    }
}
