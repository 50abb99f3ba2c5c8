//! # Error Types
//!
//! What can go wrong inside the domain layer.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ValidationError   a form or payload field broke a rule                 │
//! │        │                                                                │
//! │        ├──► CoreError::Validation     (booking, listing edits)          │
//! │        └──► AuthError::Registration   (sign-up form)                    │
//! │                                                                         │
//! │  CoreError         catalog lookups and bookings                         │
//! │  AuthError         login, sign-up and the "please login" guard          │
//! │                                                                         │
//! │  The storefront maps each of these onto an ApiError code; the           │
//! │  messages below are what ends up in form errors and toasts.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

#[derive(Debug, Error)]
pub enum CoreError {
    /// The id is not in the catalog: never listed, or deleted by its seller.
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// A field that broke a rule. `field` is the camelCase name the form uses.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Prices, seats, rating, model year, and booking totals.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Email shape, phone digits.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Currently only the registration role (`admin` is not self-service).
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Payload carried a field the input type does not know.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Rental end date is not after the start date.
    #[error("end date {end} must be after start date {start}")]
    InvalidDateRange { start: String, end: String },
}

// =============================================================================
// Auth Error
// =============================================================================

#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    /// No entry in the credential table matched.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A logout landed while the attempt was waiting.
    #[error("Session changed while logging in")]
    Superseded,

    /// The operation needs a logged-in user. `action` completes the
    /// sentence "Please login to ...".
    #[error("Please login to {action}")]
    NotAuthenticated { action: String },

    #[error("Registration rejected: {0}")]
    Registration(#[from] ValidationError),
}

impl AuthError {
    pub fn login_required(action: impl Into<String>) -> Self {
        AuthError::NotAuthenticated {
            action: action.into(),
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
