//! # Booking Commands
//!
//! The detail page's booking form and the user dashboard.
//!
//! ## Booking Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Pick dates ──► quote_booking() ──► "$135" preview                      │
//! │                                                                         │
//! │  Confirm ─────► book_vehicle()                                          │
//! │                    │                                                    │
//! │                    ├── logged out ──► toast "Please login to book..."   │
//! │                    │                                                    │
//! │                    ├── bad dates / contact ──► toast with the reason    │
//! │                    │                                                    │
//! │                    └── ok ──► ledger.create ──► toast "Booking          │
//! │                                                 confirmed successfully!"│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use rental_core::{Booking, BookingLedger, BookingRequest, CustomerInfo, Money, Vehicle};

use crate::error::ApiError;
use crate::notification::NotificationCenter;
use crate::state::{BookingState, CatalogState, SessionState};

/// What the booking form submits. The user id comes from the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookVehicleArgs {
    pub vehicle_id: String,
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    #[ts(as = "String")]
    pub end_date: NaiveDate,
    pub customer_info: CustomerInfo,
}

/// A booking with the vehicle it refers to, if that still exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithVehicle {
    pub booking: Booking,
    pub vehicle: Option<Vehicle>,
}

/// User dashboard cards and tabs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub booking_count: usize,
    /// Wishlisted vehicles that still exist.
    pub wishlist_count: usize,
    pub total_spent: Money,
    pub bookings: Vec<BookingWithVehicle>,
    pub wishlist: Vec<Vehicle>,
}

/// Books a vehicle for the logged-in user.
pub fn book_vehicle(
    session: &SessionState,
    catalog: &CatalogState,
    bookings: &BookingState,
    notifications: &NotificationCenter,
    args: BookVehicleArgs,
) -> Result<Booking, ApiError> {
    debug!(vehicle_id = %args.vehicle_id, "book_vehicle command");

    let result = session.require_user("book a vehicle").and_then(|user| {
        let request = BookingRequest {
            user_id: user.id,
            vehicle_id: args.vehicle_id,
            start_date: args.start_date,
            end_date: args.end_date,
            customer_info: args.customer_info,
        };
        bookings.create(request, catalog)
    });

    match result {
        Ok(booking) => {
            notifications.success("Booking confirmed successfully!");
            Ok(booking)
        }
        Err(e) => {
            notifications.error(e.message.clone());
            Err(e)
        }
    }
}

/// Price preview: billable days × the vehicle's daily rate.
pub fn quote_booking(
    catalog: &CatalogState,
    vehicle_id: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Money, ApiError> {
    let vehicle = catalog
        .get(vehicle_id)
        .ok_or_else(|| ApiError::not_found("Vehicle", vehicle_id))?;

    Ok(BookingLedger::quote(start_date, end_date, &vehicle)?)
}

/// The logged-in user's bookings, oldest first.
pub fn my_bookings(session: &SessionState, bookings: &BookingState) -> Result<Vec<Booking>, ApiError> {
    let user = session.require_user("view your bookings")?;
    Ok(bookings.by_user(&user.id))
}

pub fn dashboard_summary(
    session: &SessionState,
    catalog: &CatalogState,
    bookings: &BookingState,
) -> Result<DashboardSummary, ApiError> {
    let user = session.require_user("view your dashboard")?;
    debug!(user_id = %user.id, "dashboard_summary command");

    let bookings_with_vehicles: Vec<BookingWithVehicle> = bookings
        .by_user(&user.id)
        .into_iter()
        .map(|booking| {
            let vehicle = catalog.get(&booking.vehicle_id);
            BookingWithVehicle { booking, vehicle }
        })
        .collect();
    let wishlist = catalog.wishlist_vehicles();

    Ok(DashboardSummary {
        booking_count: bookings_with_vehicles.len(),
        wishlist_count: wishlist.len(),
        total_spent: bookings.total_spent(&user.id),
        bookings: bookings_with_vehicles,
        wishlist,
    })
}
