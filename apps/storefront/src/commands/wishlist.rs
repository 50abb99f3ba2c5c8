//! # Wishlist Commands
//!
//! The heart button on cards and the detail page.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use rental_core::{Vehicle, WishlistChange};

use crate::error::ApiError;
use crate::notification::NotificationCenter;
use crate::state::{CatalogState, SessionState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WishlistToggle {
    pub vehicle_id: String,
    pub change: WishlistChange,
    /// Ids after the toggle, in the order they were added.
    pub wishlist: Vec<String>,
}

/// Adds or removes a vehicle from the wishlist.
///
/// ## Behavior
/// - Logged out: error toast "Please login to add to wishlist", `UNAUTHORIZED`
/// - Added / removed: success toast, the new id list
/// - Anything else: error toast with the failure message
pub async fn toggle_wishlist(
    session: &SessionState,
    catalog: &CatalogState,
    notifications: &NotificationCenter,
    vehicle_id: &str,
) -> Result<WishlistToggle, ApiError> {
    debug!(vehicle_id = %vehicle_id, "toggle_wishlist command");

    if let Err(e) = session.require_user("add to wishlist") {
        notifications.error(e.message.clone());
        return Err(e);
    }

    let change = match catalog.toggle_wishlist(vehicle_id).await {
        Ok(change) => change,
        Err(e) => {
            notifications.error(e.message.clone());
            return Err(e);
        }
    };

    notifications.success(match change {
        WishlistChange::Added => "Added to wishlist",
        WishlistChange::Removed => "Removed from wishlist",
    });

    Ok(WishlistToggle {
        vehicle_id: vehicle_id.to_string(),
        change,
        wishlist: catalog.wishlist_ids(),
    })
}

/// Wishlisted vehicles that still exist, in catalog order.
pub fn get_wishlist(catalog: &CatalogState) -> Vec<Vehicle> {
    debug!("get_wishlist command");
    catalog.wishlist_vehicles()
}
