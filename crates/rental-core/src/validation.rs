//! # Validation Module
//!
//! Input validation for forms that reach the state containers.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: View (form inputs)                                           │
//! │  ├── required / type="email" / type="date"                             │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command payload (serde)                                      │
//! │  ├── Type validation (deserialization, unknown fields rejected)        │
//! │  └── THIS MODULE: field rules                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Container invariants                                         │
//! │  └── vehicle exists, date range is positive                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::types::{CustomerInfo, VehicleDraft};
use crate::{MAX_LISTING_PRICE_DOLLARS, MIN_PASSWORD_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required, bounded text field (names, brands, locations).
pub fn validate_required(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Exactly one `@` with a non-empty local part
/// - Domain contains a dot that is neither first nor last
///
/// ## Example
/// ```rust
/// use rental_core::validation::validate_email;
///
/// assert!(validate_email("user@carrental.com").is_ok());
/// assert!(validate_email("user@localhost").is_err());
/// assert!(validate_email("").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("missing @"))?;

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("must look like name@example.com"));
    }

    match domain.find('.') {
        Some(dot) if dot > 0 && !domain.ends_with('.') => {}
        _ => return Err(invalid("domain must contain a dot")),
    }

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain spaces"));
    }

    Ok(())
}

/// Validates a registration password.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LENGTH,
        });
    }

    Ok(())
}

/// Validates a phone number: digits plus the usual separators, 7-15 digits.
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')' | '.'))
    {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits and + - ( ) . separators".to_string(),
        });
    }

    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !(7..=15).contains(&digits) {
        return Err(ValidationError::OutOfRange {
            field: "phone digits".to_string(),
            min: 7,
            max: 15,
        });
    }

    Ok(())
}

// =============================================================================
// Booking Validators
// =============================================================================

/// Validates that a rental span is at least one day.
///
/// ## Rules
/// - `end` must be strictly after `start`
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use rental_core::validation::validate_date_range;
///
/// let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let jan4 = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
/// assert!(validate_date_range(jan1, jan4).is_ok());
/// assert!(validate_date_range(jan4, jan1).is_err());
/// assert!(validate_date_range(jan1, jan1).is_err());
/// ```
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> ValidationResult<()> {
    if end <= start {
        return Err(ValidationError::InvalidDateRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    Ok(())
}

/// Validates the contact snapshot typed into the booking form.
pub fn validate_customer_info(info: &CustomerInfo) -> ValidationResult<()> {
    validate_required("customer name", &info.name, 100)?;
    validate_email(&info.email)?;
    validate_phone(&info.phone)?;
    Ok(())
}

// =============================================================================
// Listing Validators
// =============================================================================

/// Validates a seller's new or edited listing.
///
/// ## Rules
/// - name, brand, model, location, seller id are required
/// - daily price must be positive; week/month tiers must not be negative
/// - no tier above `MAX_LISTING_PRICE_DOLLARS`
/// - at least one seat, rating within 0-5, year within 1900-2100
pub fn validate_vehicle_draft(draft: &VehicleDraft) -> ValidationResult<()> {
    validate_required("name", &draft.name, 200)?;
    validate_required("brand", &draft.brand, 100)?;
    validate_required("model", &draft.model, 100)?;
    validate_required("location", &draft.location, 100)?;
    validate_required("sellerId", &draft.seller_id, 64)?;

    let max_cents = MAX_LISTING_PRICE_DOLLARS * 100;

    if !draft.price_per_day.is_positive() || draft.price_per_day.cents() > max_cents {
        return Err(ValidationError::OutOfRange {
            field: "pricePerDay".to_string(),
            min: 1,
            max: MAX_LISTING_PRICE_DOLLARS,
        });
    }

    for (field, price) in [
        ("pricePerWeek", draft.price_per_week),
        ("pricePerMonth", draft.price_per_month),
    ] {
        if !(0..=max_cents).contains(&price.cents()) {
            return Err(ValidationError::OutOfRange {
                field: field.to_string(),
                min: 0,
                max: MAX_LISTING_PRICE_DOLLARS,
            });
        }
    }

    if draft.seats == 0 {
        return Err(ValidationError::OutOfRange {
            field: "seats".to_string(),
            min: 1,
            max: u8::MAX as i64,
        });
    }

    if !(0.0..=5.0).contains(&draft.rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: 5,
        });
    }

    if !(1900..=2100).contains(&draft.year) {
        return Err(ValidationError::OutOfRange {
            field: "year".to_string(),
            min: 1900,
            max: 2100,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@carrental.com").is_ok());
        assert!(validate_email("first.last@mail.example.org").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@carrental.com").is_err());
        assert!(validate_email("a@b@c.com").is_err());
        assert!(validate_email("user@.com").is_err());
        assert!(validate_email("user@carrental.").is_err());
        assert!(validate_email("us er@carrental.com").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("user123").is_ok());
        assert_eq!(
            validate_password("abc"),
            Err(ValidationError::TooShort {
                field: "password".to_string(),
                min: 6
            })
        );
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+1 (555) 123-4567").is_ok());
        assert!(validate_phone("5551234").is_ok());
        assert!(validate_phone("").is_err());
        assert!(validate_phone("call me").is_err());
        assert!(validate_phone("123").is_err());
    }

    #[test]
    fn test_validate_customer_info() {
        let info = CustomerInfo {
            name: "Jane User".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-123-4567".to_string(),
        };
        assert!(validate_customer_info(&info).is_ok());

        let missing_name = CustomerInfo {
            name: "  ".to_string(),
            ..info
        };
        assert!(matches!(
            validate_customer_info(&missing_name),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_vehicle_draft() {
        let draft = VehicleDraft::from(seed::mock_vehicles()[0].clone());
        assert!(validate_vehicle_draft(&draft).is_ok());

        let mut free = draft.clone();
        free.price_per_day = crate::Money::zero();
        assert!(validate_vehicle_draft(&free).is_err());

        let mut no_seats = draft.clone();
        no_seats.seats = 0;
        assert!(validate_vehicle_draft(&no_seats).is_err());

        let mut bad_rating = draft.clone();
        bad_rating.rating = 5.5;
        assert!(validate_vehicle_draft(&bad_rating).is_err());
    }

    #[test]
    fn test_listing_price_is_capped() {
        let mut draft = VehicleDraft::from(seed::mock_vehicles()[0].clone());
        draft.price_per_day = crate::Money::from_major(MAX_LISTING_PRICE_DOLLARS);
        assert!(validate_vehicle_draft(&draft).is_ok());

        draft.price_per_day = crate::Money::from_cents(i64::MAX / 2);
        assert_eq!(
            validate_vehicle_draft(&draft),
            Err(ValidationError::OutOfRange {
                field: "pricePerDay".to_string(),
                min: 1,
                max: MAX_LISTING_PRICE_DOLLARS,
            })
        );

        let mut monthly = VehicleDraft::from(seed::mock_vehicles()[0].clone());
        monthly.price_per_month = crate::Money::from_major(MAX_LISTING_PRICE_DOLLARS + 1);
        assert!(validate_vehicle_draft(&monthly).is_err());
    }
}
