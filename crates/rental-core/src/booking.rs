//! # Booking Module
//!
//! The booking ledger and rental price calculation.
//!
//! ## Pricing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  total_price = billable_days(end - start) × vehicle.price_per_day       │
//! │                                                                         │
//! │  billable_days rounds partial days UP:                                  │
//! │    2024-01-01 → 2024-01-04   = 3 days                                   │
//! │    36 hours                  = 2 days                                   │
//! │                                                                         │
//! │  Only the daily tier is used; week/month tiers are display-only.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bookings are only ever appended. There is no cancel or update, and two
//! bookings for the same vehicle may overlap.

use chrono::{NaiveDate, TimeDelta, Utc};
use uuid::Uuid;

use crate::catalog::VehicleCatalog;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Booking, BookingRequest, BookingStatus, Vehicle};
use crate::validation::{validate_customer_info, validate_date_range, validate_required};

const SECONDS_PER_DAY: i64 = 86_400;

/// Number of days a rental span is billed for, rounding partial days up.
///
/// ## Example
/// ```rust
/// use chrono::TimeDelta;
/// use rental_core::booking::billable_days;
///
/// assert_eq!(billable_days(TimeDelta::days(3)), 3);
/// assert_eq!(billable_days(TimeDelta::hours(36)), 2);
/// assert_eq!(billable_days(TimeDelta::zero()), 0);
/// ```
pub fn billable_days(span: TimeDelta) -> i64 {
    let seconds = span.num_seconds();
    // ceiling division that also holds for negative spans
    -((-seconds).div_euclid(SECONDS_PER_DAY))
}

/// All bookings made in this session, in creation order.
#[derive(Debug, Clone, Default)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
}

impl BookingLedger {
    pub fn new() -> Self {
        BookingLedger::default()
    }

    /// Price preview for a date range on one vehicle.
    ///
    /// ## Errors
    /// - `InvalidDateRange` when `end` is not after `start`
    /// - `OutOfRange` when the total does not fit in `Money`
    pub fn quote(start: NaiveDate, end: NaiveDate, vehicle: &Vehicle) -> Result<Money, ValidationError> {
        validate_date_range(start, end)?;
        let days = billable_days(end.signed_duration_since(start));
        vehicle
            .price_per_day
            .times_days(days)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "totalPrice".to_string(),
                min: 0,
                max: i64::MAX,
            })
    }

    /// Records a booking against a vehicle that exists right now.
    ///
    /// ## Errors
    /// - `VehicleNotFound` when the id is not in the catalog
    /// - `Validation` for an empty user id, bad contact details, or a
    ///   non-positive date range
    pub fn create(&mut self, request: BookingRequest, catalog: &VehicleCatalog) -> CoreResult<Booking> {
        let vehicle = catalog
            .get(&request.vehicle_id)
            .ok_or_else(|| CoreError::VehicleNotFound(request.vehicle_id.clone()))?;

        validate_required("userId", &request.user_id, 64)?;
        validate_customer_info(&request.customer_info)?;
        let total_price = Self::quote(request.start_date, request.end_date, vehicle)?;

        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            user_id: request.user_id,
            vehicle_id: request.vehicle_id,
            start_date: request.start_date,
            end_date: request.end_date,
            total_price,
            status: BookingStatus::Upcoming,
            customer_info: request.customer_info,
            created_at: Utc::now(),
        };

        tracing::info!(
            booking_id = %booking.id,
            vehicle_id = %booking.vehicle_id,
            total = %booking.total_price,
            "Booking created"
        );

        self.bookings.push(booking.clone());
        Ok(booking)
    }

    pub fn get(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn list(&self) -> &[Booking] {
        &self.bookings
    }

    /// One user's bookings, oldest first.
    pub fn by_user(&self, user_id: &str) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Sum of every booking total for the user (the dashboard's "Total Spent").
    pub fn total_spent(&self, user_id: &str) -> Money {
        self.bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .map(|b| b.total_price)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::types::CustomerInfo;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(vehicle_id: &str, start: NaiveDate, end: NaiveDate) -> BookingRequest {
        BookingRequest {
            user_id: "3".to_string(),
            vehicle_id: vehicle_id.to_string(),
            start_date: start,
            end_date: end,
            customer_info: CustomerInfo {
                name: "Jane User".to_string(),
                email: "user@carrental.com".to_string(),
                phone: "555-123-4567".to_string(),
            },
        }
    }

    #[test]
    fn test_billable_days_rounds_up() {
        assert_eq!(billable_days(TimeDelta::days(1)), 1);
        assert_eq!(billable_days(TimeDelta::hours(25)), 2);
        assert_eq!(billable_days(TimeDelta::seconds(1)), 1);
        assert_eq!(billable_days(TimeDelta::hours(-36)), -1);
    }

    #[test]
    fn test_three_day_rental_price() {
        let catalog = VehicleCatalog::with_vehicles(seed::mock_vehicles());
        let mut ledger = BookingLedger::new();

        let booking = ledger
            .create(request("1", date(2024, 1, 1), date(2024, 1, 4)), &catalog)
            .unwrap();

        assert_eq!(booking.total_price, Money::from_major(135));
        assert_eq!(booking.status, BookingStatus::Upcoming);
        assert_eq!(ledger.get(&booking.id), Some(&booking));
    }

    #[test]
    fn test_overflowing_total_rejected() {
        let mut vehicle = seed::mock_vehicles()[0].clone();
        vehicle.price_per_day = Money::from_cents(i64::MAX / 2);
        let catalog = VehicleCatalog::with_vehicles(vec![vehicle.clone()]);
        let mut ledger = BookingLedger::new();

        let quote = BookingLedger::quote(date(2024, 1, 1), date(2024, 1, 4), &vehicle);
        assert!(matches!(quote, Err(ValidationError::OutOfRange { field, .. }) if field == "totalPrice"));

        let booking = ledger.create(request(&vehicle.id, date(2024, 1, 1), date(2024, 1, 4)), &catalog);
        assert!(booking.is_err());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_reversed_and_empty_ranges_rejected() {
        let catalog = VehicleCatalog::with_vehicles(seed::mock_vehicles());
        let mut ledger = BookingLedger::new();

        let reversed = ledger.create(request("1", date(2024, 1, 4), date(2024, 1, 1)), &catalog);
        assert!(matches!(
            reversed,
            Err(CoreError::Validation(ValidationError::InvalidDateRange { .. }))
        ));

        let same_day = ledger.create(request("1", date(2024, 1, 1), date(2024, 1, 1)), &catalog);
        assert!(same_day.is_err());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_unknown_vehicle_rejected() {
        let catalog = VehicleCatalog::with_vehicles(seed::mock_vehicles());
        let mut ledger = BookingLedger::new();

        let result = ledger.create(request("999", date(2024, 1, 1), date(2024, 1, 2)), &catalog);
        assert!(matches!(result, Err(CoreError::VehicleNotFound(id)) if id == "999"));
    }

    #[test]
    fn test_overlapping_bookings_are_accepted() {
        let catalog = VehicleCatalog::with_vehicles(seed::mock_vehicles());
        let mut ledger = BookingLedger::new();

        ledger.create(request("2", date(2024, 3, 1), date(2024, 3, 5)), &catalog).unwrap();
        ledger.create(request("2", date(2024, 3, 3), date(2024, 3, 6)), &catalog).unwrap();
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_by_user_and_total_spent() {
        let catalog = VehicleCatalog::with_vehicles(seed::mock_vehicles());
        let mut ledger = BookingLedger::new();

        // $45 × 3 and $120 × 2
        ledger.create(request("1", date(2024, 1, 1), date(2024, 1, 4)), &catalog).unwrap();
        ledger.create(request("2", date(2024, 2, 1), date(2024, 2, 3)), &catalog).unwrap();

        let mut other = request("3", date(2024, 1, 1), date(2024, 1, 2));
        other.user_id = "1".to_string();
        ledger.create(other, &catalog).unwrap();

        let mine = ledger.by_user("3");
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].vehicle_id, "1");
        assert_eq!(ledger.total_spent("3"), Money::from_major(375));
        assert_eq!(ledger.total_spent("nobody"), Money::zero());
    }

    #[test]
    fn test_quote_matches_created_total() {
        let vehicles = seed::mock_vehicles();
        let tesla = &vehicles[4];
        let quote = BookingLedger::quote(date(2024, 5, 1), date(2024, 5, 8), tesla).unwrap();
        assert_eq!(quote, Money::from_major(1050));
    }
}
