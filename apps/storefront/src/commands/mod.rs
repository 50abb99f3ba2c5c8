//! # Commands Module
//!
//! Every operation the storefront views call.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports + JSON dispatch)
//! ├── vehicle.rs   ◄─── Listing, detail, seller listing management
//! ├── wishlist.rs  ◄─── Heart button, wishlist tab
//! ├── booking.rs   ◄─── Booking form, dashboard
//! ├── auth.rs      ◄─── Login, register, logout
//! └── search.rs    ◄─── Landing page search handoff
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  View                                                                   │
//! │  ────                                                                   │
//! │  { "command": "toggle_wishlist", "args": { "vehicleId": "4" } }         │
//! │         │                                                               │
//! │         │ (one JSON object per line on stdin)                           │
//! │         ▼                                                               │
//! │  invoke(&app, "toggle_wishlist", args)                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  wishlist::toggle_wishlist(                                             │
//! │      &app.session,        ◄── Only the state it needs                  │
//! │      &app.catalog,                                                      │
//! │      &app.notifications,                                                │
//! │      &args.vehicle_id,    ◄── From the JSON args                       │
//! │  ) -> Result<WishlistToggle, ApiError>                                  │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  { "ok": { "vehicleId": "4", "change": "added", ... } }                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod booking;
pub mod search;
pub mod vehicle;
pub mod wishlist;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use rental_core::search::SearchForm;
use rental_core::session::RegistrationInput;
use rental_core::{Vehicle, VehicleDraft};

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VehicleIdArgs {
    vehicle_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SellerArgs {
    seller_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QueryArgs {
    query: String,
}

#[derive(Debug, Deserialize)]
struct LoginArgs {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteArgs {
    vehicle_id: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct FormArgs {
    form: SearchForm,
}

#[derive(Debug, Deserialize)]
struct DraftArgs {
    vehicle: VehicleDraft,
}

#[derive(Debug, Deserialize)]
struct VehicleArgs {
    vehicle: Vehicle,
}

#[derive(Debug, Deserialize)]
struct RegisterArgs {
    input: RegistrationInput,
}

fn args<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    // commands without arguments may be sent with no "args" at all
    let value = if value.is_null() {
        Value::Object(Default::default())
    } else {
        value
    };
    Ok(serde_json::from_value(value)?)
}

fn reply<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::internal(format!("Failed to encode response: {}", e)))
}

/// Runs a command by name with JSON arguments.
///
/// ## Errors
/// - `NOT_FOUND` for an unknown command name
/// - `VALIDATION_ERROR` when `args` does not match the command
/// - whatever the command itself returns
pub async fn invoke(app: &AppState, command: &str, raw: Value) -> Result<Value, ApiError> {
    match command {
        // Vehicles
        "list_vehicles" => reply(vehicle::list_vehicles(&app.catalog)),
        "search_vehicles" => {
            let a: QueryArgs = args(raw)?;
            reply(vehicle::search_vehicles(&app.catalog, &a.query))
        }
        "get_vehicle" => {
            let a: VehicleIdArgs = args(raw)?;
            reply(vehicle::get_vehicle(&app.catalog, &a.vehicle_id)?)
        }
        "add_vehicle" => {
            let a: DraftArgs = args(raw)?;
            reply(vehicle::add_vehicle(&app.catalog, a.vehicle)?)
        }
        "update_vehicle" => {
            let a: VehicleArgs = args(raw)?;
            reply(vehicle::update_vehicle(&app.catalog, a.vehicle)?)
        }
        "delete_vehicle" => {
            let a: VehicleIdArgs = args(raw)?;
            reply(vehicle::delete_vehicle(&app.catalog, &a.vehicle_id)?)
        }
        "seller_vehicles" => {
            let a: SellerArgs = args(raw)?;
            reply(vehicle::seller_vehicles(&app.catalog, &a.seller_id))
        }

        // Wishlist
        "toggle_wishlist" => {
            let a: VehicleIdArgs = args(raw)?;
            reply(
                wishlist::toggle_wishlist(&app.session, &app.catalog, &app.notifications, &a.vehicle_id)
                    .await?,
            )
        }
        "get_wishlist" => reply(wishlist::get_wishlist(&app.catalog)),

        // Bookings
        "book_vehicle" => {
            let a: booking::BookVehicleArgs = args(raw)?;
            reply(booking::book_vehicle(
                &app.session,
                &app.catalog,
                &app.bookings,
                &app.notifications,
                a,
            )?)
        }
        "quote_booking" => {
            let a: QuoteArgs = args(raw)?;
            reply(booking::quote_booking(&app.catalog, &a.vehicle_id, a.start_date, a.end_date)?)
        }
        "my_bookings" => reply(booking::my_bookings(&app.session, &app.bookings)?),
        "dashboard_summary" => reply(booking::dashboard_summary(
            &app.session,
            &app.catalog,
            &app.bookings,
        )?),

        // Auth
        "login" => {
            let a: LoginArgs = args(raw)?;
            reply(auth::login(&app.session, &app.notifications, &a.email, &a.password).await?)
        }
        "register" => {
            let a: RegisterArgs = args(raw)?;
            reply(auth::register(&app.session, &app.notifications, a.input).await?)
        }
        "logout" => reply(auth::logout(&app.session).await?),
        "current_user" => reply(auth::current_user(&app.session)),

        // Search
        "build_search_url" => {
            let a: FormArgs = args(raw)?;
            reply(search::build_search_url(&a.form))
        }

        // Notifications
        "current_toast" => reply(app.notifications.current()),
        "dismiss_toast" => {
            app.notifications.dismiss();
            reply(())
        }

        other => Err(ApiError::not_found("Command", other)),
    }
}
