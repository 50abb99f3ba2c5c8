//! # API Error Type
//!
//! The one error shape every storefront command returns.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  source                          code                   toast?          │
//! │  ──────                          ────                   ──────          │
//! │  CoreError::VehicleNotFound  ──► NOT_FOUND                              │
//! │  ValidationError / bad args  ──► VALIDATION_ERROR       booking form    │
//! │  AuthError::InvalidCredentials ► AUTHENTICATION_ERROR   login form      │
//! │  AuthError::NotAuthenticated ──► UNAUTHORIZED           "Please login"  │
//! │  DbError                     ──► DATABASE_ERROR         (detail logged) │
//! │  response encoding           ──► INTERNAL                               │
//! │                                                                         │
//! │  { "code": "UNAUTHORIZED", "message": "Please login to book a vehicle" }│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use rental_core::{AuthError, CoreError, ValidationError};
use rental_db::DbError;

/// Sent back as the `error` member of a failed response line.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub code: ErrorCode,
    /// Shown as-is in toasts and under form fields.
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in the View
/// ```typescript
/// try {
///   await invoke('toggle_wishlist', { vehicleId });
/// } catch (e) {
///   switch (e.code) {
///     case 'UNAUTHORIZED':
///       navigate('/login');
///       break;
///     case 'NOT_FOUND':
///       showNotFound();
///       break;
///     default:
///       toast.error(e.message);
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Email/password did not match (401)
    AuthenticationError,

    /// Action needs a logged-in user (401)
    Unauthorized,

    /// Local storage failed (500)
    DatabaseError,

    /// Internal error (500)
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// `"{resource} not found: {id}"`, matching the core lookup message.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// The cause is logged here. The view only sees a generic message, except
/// for a corrupt record, which names its key.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Open { path, reason } => {
                tracing::error!(path = %path, "Cannot open storage: {}", reason);
                ApiError::new(ErrorCode::DatabaseError, "Storage connection failed")
            }
            DbError::Schema(e) => {
                tracing::error!("Storage migration failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Storage migration failed")
            }
            DbError::Closed => {
                tracing::warn!("Storage used after close");
                ApiError::new(ErrorCode::DatabaseError, "Storage is closed")
            }
            DbError::Query(e) => {
                tracing::error!("Storage query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Storage operation failed")
            }
            DbError::CorruptRecord { key, reason } => {
                tracing::error!(key = %key, "Corrupt stored record: {}", reason);
                ApiError::new(ErrorCode::DatabaseError, format!("Stored {} is unreadable", key))
            }
            DbError::Encode { key, source } => {
                tracing::error!(key = %key, "Record serialization failed: {}", source);
                ApiError::new(ErrorCode::Internal, "Could not encode record")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::VehicleNotFound(id) => ApiError::not_found("Vehicle", &id),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// ```text
/// InvalidCredentials → AUTHENTICATION_ERROR
/// Superseded         → AUTHENTICATION_ERROR
/// NotAuthenticated   → UNAUTHORIZED
/// Registration       → VALIDATION_ERROR
/// ```
impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials | AuthError::Superseded => {
                ApiError::new(ErrorCode::AuthenticationError, err.to_string())
            }
            AuthError::NotAuthenticated { .. } => {
                ApiError::new(ErrorCode::Unauthorized, err.to_string())
            }
            AuthError::Registration(e) => e.into(),
        }
    }
}

/// Malformed command arguments.
///
/// Payloads with fields their type does not know become
/// `ValidationError::UnknownField`.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        let message = err.to_string();
        match unknown_field(&message) {
            Some(field) => ValidationError::UnknownField(field.to_string()).into(),
            None => ApiError::validation(format!("Invalid arguments: {}", message)),
        }
    }
}

/// serde reports these as "unknown field `name`, expected one of ...".
fn unknown_field(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("unknown field `")?;
    rest.split_once('`').map(|(field, _)| field)
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
