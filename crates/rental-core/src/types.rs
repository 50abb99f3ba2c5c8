//! # Domain Types
//!
//! Core domain types used throughout the rental storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Vehicle      │   │    Booking      │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  vehicle_id     │   │  id             │       │
//! │  │  category       │   │  user_id ───────┼──►│  email          │       │
//! │  │  price_per_day  │   │  start / end    │   │  role           │       │
//! │  │  seller_id      │   │  total_price    │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ VehicleCategory │   │  BookingStatus  │   │      Role       │       │
//! │  │  car            │   │  upcoming       │   │  user           │       │
//! │  │  bike           │   │  completed      │   │  seller         │       │
//! │  │  luxury         │   │  cancelled      │   │  admin          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names serialize in camelCase so stored records and command payloads
//! read the same way the view layer writes them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Vehicle Enums
// =============================================================================

/// Listing category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Car,
    Bike,
    Luxury,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Manual,
    Automatic,
}

/// Implements `as_str`, `Display` and `FromStr` for a lowercase wire enum.
macro_rules! wire_enum {
    ($ty:ident, $field:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            /// Returns the lowercase wire name.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($text => Ok($ty::$variant),)+
                    _ => Err(ValidationError::NotAllowed {
                        field: $field.to_string(),
                        allowed: vec![$($text.to_string()),+],
                    }),
                }
            }
        }
    };
}

wire_enum!(VehicleCategory, "vehicleType", {
    Car => "car",
    Bike => "bike",
    Luxury => "luxury",
});

wire_enum!(FuelType, "fuelType", {
    Petrol => "petrol",
    Diesel => "diesel",
    Electric => "electric",
    Hybrid => "hybrid",
});

wire_enum!(Transmission, "transmission", {
    Manual => "manual",
    Automatic => "automatic",
});

// =============================================================================
// Vehicle
// =============================================================================

/// A vehicle listing in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Unique identifier. Seed listings use "1".."20", new listings a UUID v4.
    pub id: String,

    /// Display name ("Toyota Camry 2023").
    pub name: String,
    pub brand: String,
    pub model: String,
    pub year: u16,

    #[serde(rename = "type")]
    pub category: VehicleCategory,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub seats: u8,

    /// Daily rate; the only tier bookings are priced from.
    pub price_per_day: Money,
    pub price_per_week: Money,
    pub price_per_month: Money,

    /// City name, matched by case-insensitive substring.
    pub location: String,
    pub images: Vec<String>,
    pub features: Vec<String>,

    /// Average rating, 0.0 to 5.0.
    pub rating: f32,

    /// Number of reviews (drives the "popularity" sort).
    pub reviews: u32,
    pub available: bool,
    pub seller_id: String,
    pub description: String,

    /// MPG for combustion vehicles, range in miles for electric ones.
    pub mileage: u32,
    pub engine_size: String,
    pub color: String,

    /// Whether an admin approved the listing.
    pub approved: bool,
}

/// Everything a seller submits for a new listing (no id yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDraft {
    pub name: String,
    pub brand: String,
    pub model: String,
    pub year: u16,
    #[serde(rename = "type")]
    pub category: VehicleCategory,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub seats: u8,
    pub price_per_day: Money,
    pub price_per_week: Money,
    pub price_per_month: Money,
    pub location: String,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub rating: f32,
    pub reviews: u32,
    pub available: bool,
    pub seller_id: String,
    pub description: String,
    pub mileage: u32,
    pub engine_size: String,
    pub color: String,
    pub approved: bool,
}

impl VehicleDraft {
    /// Attaches an id, producing a catalog record.
    pub fn into_vehicle(self, id: String) -> Vehicle {
        Vehicle {
            id,
            name: self.name,
            brand: self.brand,
            model: self.model,
            year: self.year,
            category: self.category,
            fuel_type: self.fuel_type,
            transmission: self.transmission,
            seats: self.seats,
            price_per_day: self.price_per_day,
            price_per_week: self.price_per_week,
            price_per_month: self.price_per_month,
            location: self.location,
            images: self.images,
            features: self.features,
            rating: self.rating,
            reviews: self.reviews,
            available: self.available,
            seller_id: self.seller_id,
            description: self.description,
            mileage: self.mileage,
            engine_size: self.engine_size,
            color: self.color,
            approved: self.approved,
        }
    }
}

impl From<Vehicle> for VehicleDraft {
    fn from(vehicle: Vehicle) -> Self {
        VehicleDraft {
            name: vehicle.name,
            brand: vehicle.brand,
            model: vehicle.model,
            year: vehicle.year,
            category: vehicle.category,
            fuel_type: vehicle.fuel_type,
            transmission: vehicle.transmission,
            seats: vehicle.seats,
            price_per_day: vehicle.price_per_day,
            price_per_week: vehicle.price_per_week,
            price_per_month: vehicle.price_per_month,
            location: vehicle.location,
            images: vehicle.images,
            features: vehicle.features,
            rating: vehicle.rating,
            reviews: vehicle.reviews,
            available: vehicle.available,
            seller_id: vehicle.seller_id,
            description: vehicle.description,
            mileage: vehicle.mileage,
            engine_size: vehicle.engine_size,
            color: vehicle.color,
            approved: vehicle.approved,
        }
    }
}

// =============================================================================
// Booking
// =============================================================================

/// Booking lifecycle. Only `Upcoming` is ever assigned today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Upcoming,
    Completed,
    Cancelled,
}

/// Contact details typed into the booking form, frozen on the booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A reservation linking a user, a vehicle and a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub vehicle_id: String,
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    #[ts(as = "String")]
    pub end_date: NaiveDate,
    /// Billable days × the vehicle's daily rate at booking time.
    pub total_price: Money,
    pub status: BookingStatus,
    pub customer_info: CustomerInfo,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// What the booking form submits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub user_id: String,
    pub vehicle_id: String,
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    #[ts(as = "String")]
    pub end_date: NaiveDate,
    pub customer_info: CustomerInfo,
}

// =============================================================================
// User
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Seller,
    Admin,
}

wire_enum!(Role, "role", {
    User => "user",
    Seller => "seller",
    Admin => "admin",
});

/// The authenticated identity. Never carries a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_parsing_is_case_insensitive() {
        assert_eq!("Luxury".parse::<VehicleCategory>(), Ok(VehicleCategory::Luxury));
        assert_eq!("electric".parse::<FuelType>(), Ok(FuelType::Electric));
        assert_eq!(" AUTOMATIC ".parse::<Transmission>(), Ok(Transmission::Automatic));
        assert!("truck".parse::<VehicleCategory>().is_err());
    }

    #[test]
    fn test_vehicle_category_serializes_as_type() {
        let draft = VehicleDraft {
            name: "Test".to_string(),
            brand: "Brand".to_string(),
            model: "Model".to_string(),
            year: 2024,
            category: VehicleCategory::Bike,
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Manual,
            seats: 2,
            price_per_day: Money::from_major(50),
            price_per_week: Money::from_major(300),
            price_per_month: Money::from_major(1000),
            location: "Denver".to_string(),
            images: vec![],
            features: vec![],
            rating: 0.0,
            reviews: 0,
            available: true,
            seller_id: "2".to_string(),
            description: String::new(),
            mileage: 40,
            engine_size: "650cc".to_string(),
            color: "Red".to_string(),
            approved: false,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["type"], "bike");
        assert_eq!(json["pricePerDay"], 5000);
        assert_eq!(json["sellerId"], "2");
    }

    #[test]
    fn test_user_json_omits_absent_optionals() {
        let user = User {
            id: "3".to_string(),
            email: "user@carrental.com".to_string(),
            name: "Jane User".to_string(),
            role: Role::User,
            avatar: None,
            phone: None,
            verified: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(
            json,
            r#"{"id":"3","email":"user@carrental.com","name":"Jane User","role":"user"}"#
        );
    }

    #[test]
    fn test_booking_status_default() {
        assert_eq!(BookingStatus::default(), BookingStatus::Upcoming);
    }
}
