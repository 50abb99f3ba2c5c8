//! # Search Handoff
//!
//! Encodes the landing page's search form into a listing URL, and decodes a
//! listing URL back into filter state.
//!
//! ```text
//!   Home search form ──to_url()──► /vehicles?location=Miami&vehicleType=bike
//!                                           │
//!   Vehicles page ◄──ListingQuery::parse()──┘
//! ```
//!
//! Parsing is lenient: unknown keys and values that do not parse are dropped,
//! the page just renders with fewer filters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use url::form_urlencoded;

use crate::catalog::{SortKey, VehicleFilter};
use crate::money::Money;
use crate::types::{FuelType, Transmission, VehicleCategory};

/// Path of the listing page.
pub const LISTING_PATH: &str = "/vehicles";

// =============================================================================
// Landing Page Form
// =============================================================================

/// The "Find Your Ride" form. Fields hold raw input text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchForm {
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub vehicle_type: String,
}

impl SearchForm {
    /// Query string holding only the non-empty fields, in form order.
    pub fn to_query_string(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (key, value) in [
            ("location", &self.location),
            ("startDate", &self.start_date),
            ("endDate", &self.end_date),
            ("vehicleType", &self.vehicle_type),
        ] {
            if !value.is_empty() {
                query.append_pair(key, value);
            }
        }
        query.finish()
    }

    /// Listing page URL for this search.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::search::SearchForm;
    ///
    /// let form = SearchForm {
    ///     location: "New York".to_string(),
    ///     vehicle_type: "car".to_string(),
    ///     ..SearchForm::default()
    /// };
    /// assert_eq!(form.to_url(), "/vehicles?location=New+York&vehicleType=car");
    /// ```
    pub fn to_url(&self) -> String {
        format!("{}?{}", LISTING_PATH, self.to_query_string())
    }
}

// =============================================================================
// Listing Page Query
// =============================================================================

/// Initial filter and sort state decoded from the listing URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingQuery {
    pub location: Option<String>,
    #[ts(as = "Option<String>")]
    pub start_date: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub end_date: Option<NaiveDate>,
    pub vehicle_type: Option<VehicleCategory>,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub min_price: Option<Money>,
    pub max_price: Option<Money>,
    pub sort_by: SortKey,
}

impl ListingQuery {
    /// Parses a query string, a `?`-prefixed query, or a whole
    /// `/vehicles?...` path. The first occurrence of a key wins.
    pub fn parse(input: &str) -> Self {
        let query = match input.split_once('?') {
            Some((_, query)) => query,
            None => input,
        };

        let mut parsed = ListingQuery::default();
        let mut seen: Vec<String> = Vec::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if seen.iter().any(|k| *k == key) {
                continue;
            }
            seen.push(key.to_string());

            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            let applied = match &*key {
                "location" => {
                    parsed.location = Some(value.to_string());
                    true
                }
                "startDate" => set(&mut parsed.start_date, parse_date(value)),
                "endDate" => set(&mut parsed.end_date, parse_date(value)),
                "vehicleType" => set(&mut parsed.vehicle_type, value.parse().ok()),
                "fuelType" => set(&mut parsed.fuel_type, value.parse().ok()),
                "transmission" => set(&mut parsed.transmission, value.parse().ok()),
                "minPrice" => set(&mut parsed.min_price, parse_whole_price(value)),
                "maxPrice" => set(&mut parsed.max_price, parse_whole_price(value)),
                "sortBy" => match value.parse() {
                    Ok(sort) => {
                        parsed.sort_by = sort;
                        true
                    }
                    Err(_) => false,
                },
                _ => false,
            };

            if !applied {
                tracing::debug!(key = %key, value = %value, "Ignoring listing query parameter");
            }
        }

        parsed
    }

    /// The criteria part, ready for `VehicleCatalog::search`.
    pub fn to_filter(&self) -> VehicleFilter {
        VehicleFilter {
            location: self.location.clone(),
            category: self.vehicle_type,
            fuel_type: self.fuel_type,
            transmission: self.transmission,
            min_price: self.min_price,
            max_price: self.max_price,
        }
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_by
    }

    /// Encodes the set fields back into a query string. The default sort is
    /// left out.
    pub fn to_query_string(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());

        if let Some(location) = &self.location {
            query.append_pair("location", location);
        }
        if let Some(date) = self.start_date {
            query.append_pair("startDate", &date.to_string());
        }
        if let Some(date) = self.end_date {
            query.append_pair("endDate", &date.to_string());
        }
        if let Some(category) = self.vehicle_type {
            query.append_pair("vehicleType", category.as_str());
        }
        if let Some(fuel) = self.fuel_type {
            query.append_pair("fuelType", fuel.as_str());
        }
        if let Some(transmission) = self.transmission {
            query.append_pair("transmission", transmission.as_str());
        }
        if let Some(min) = self.min_price {
            query.append_pair("minPrice", &min.dollars().to_string());
        }
        if let Some(max) = self.max_price {
            query.append_pair("maxPrice", &max.dollars().to_string());
        }
        if self.sort_by != SortKey::default() {
            query.append_pair("sortBy", self.sort_by.as_str());
        }

        query.finish()
    }
}

fn set<T>(slot: &mut Option<T>, value: Option<T>) -> bool {
    let applied = value.is_some();
    if applied {
        *slot = value;
    }
    applied
}

/// Dates come from `<input type="date">`, always `YYYY-MM-DD`.
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Price inputs are whole dollars. Values too large to hold in cents are
/// ignored like any other unparseable input.
fn parse_whole_price(value: &str) -> Option<Money> {
    value
        .parse::<i64>()
        .ok()
        .filter(|dollars| *dollars >= 0)
        .and_then(Money::checked_from_major)
}

// =============================================================================
// Unit Tests
// =============================================================================
