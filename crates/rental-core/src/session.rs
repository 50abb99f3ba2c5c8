//! # Session Module
//!
//! The mock credential table, registration input, and the session state
//! machine behind the login form.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Anonymous ──begin()──► Loading ──succeed(user)──► Authenticated       │
//! │       ▲                     │                             │             │
//! │       │                     └──fail()──► (previous state) │             │
//! │       └──────────────────────────clear()──────────────────┘             │
//! │                                                                         │
//! │   clear() starts a new epoch. Attempts begun before it can no longer    │
//! │   succeed, and their completion no longer touches the loading flag.     │
//! │                                                                         │
//! │   Waiting, persistence and restore live in the storefront app; this     │
//! │   module only decides who is logged in.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{AuthError, ValidationError};
use crate::types::{Role, User};
use crate::validation::{validate_email, validate_password, validate_phone, validate_required};

// =============================================================================
// Credential Table
// =============================================================================

struct Credential {
    id: &'static str,
    email: &'static str,
    password: &'static str,
    name: &'static str,
    role: Role,
}

impl Credential {
    fn to_user(&self) -> User {
        User {
            id: self.id.to_string(),
            email: self.email.to_string(),
            name: self.name.to_string(),
            role: self.role,
            avatar: None,
            phone: None,
            verified: None,
        }
    }
}

/// The demo accounts. There is no other source of truth for login.
const CREDENTIALS: [Credential; 3] = [
    Credential {
        id: "1",
        email: "admin@carrental.com",
        password: "admin123",
        name: "Admin User",
        role: Role::Admin,
    },
    Credential {
        id: "2",
        email: "seller@carrental.com",
        password: "seller123",
        name: "John Seller",
        role: Role::Seller,
    },
    Credential {
        id: "3",
        email: "user@carrental.com",
        password: "user123",
        name: "Jane User",
        role: Role::User,
    },
];

/// Checks an email/password pair against the demo accounts.
///
/// Matching is exact on both fields. The returned user never carries the
/// password.
///
/// ## Example
/// ```rust
/// use rental_core::session::authenticate;
/// use rental_core::types::Role;
///
/// let user = authenticate("seller@carrental.com", "seller123").unwrap();
/// assert_eq!(user.role, Role::Seller);
/// assert!(authenticate("seller@carrental.com", "wrong").is_err());
/// ```
pub fn authenticate(email: &str, password: &str) -> Result<User, AuthError> {
    CREDENTIALS
        .iter()
        .find(|c| c.email == email && c.password == password)
        .map(Credential::to_user)
        .ok_or(AuthError::InvalidCredentials)
}

// =============================================================================
// Registration
// =============================================================================

/// Sign-up form payload.
///
/// Unknown fields are rejected at deserialization, so a payload cannot smuggle
/// in an `id` or `verified` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Defaults to `user`.
    #[serde(default)]
    pub role: Option<Role>,
}

impl RegistrationInput {
    /// Validates the form.
    ///
    /// ## Rules
    /// - name is required
    /// - email must be well formed
    /// - password must be at least 6 characters
    /// - phone, when given, must be a plausible number
    /// - role may be `user` or `seller`; nobody signs up as `admin`
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required("name", &self.name, 100)?;
        validate_email(&self.email)?;
        validate_password(&self.password)?;

        if let Some(phone) = self.phone.as_deref().filter(|p| !p.trim().is_empty()) {
            validate_phone(phone)?;
        }

        if self.role == Some(Role::Admin) {
            return Err(ValidationError::NotAllowed {
                field: "role".to_string(),
                allowed: vec![Role::User.to_string(), Role::Seller.to_string()],
            });
        }

        Ok(())
    }

    /// Validates and converts into a fresh user with a UUID id.
    ///
    /// The email is not checked against existing accounts.
    pub fn into_user(self) -> Result<User, AuthError> {
        self.validate()?;

        Ok(User {
            id: Uuid::new_v4().to_string(),
            email: self.email.trim().to_string(),
            name: self.name.trim().to_string(),
            role: self.role.unwrap_or_default(),
            avatar: None,
            phone: self
                .phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            verified: None,
        })
    }
}

// =============================================================================
// Session State
// =============================================================================

/// Who is logged in, and whether a login is in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<User>,
    /// Attempts begun in the current epoch that have not finished.
    pending: usize,
    epoch: u64,
}

/// Serializable view of the session for the navbar and guards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub is_loading: bool,
    pub is_authenticated: bool,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Session for a user read back from storage.
    pub fn restored(user: User) -> Self {
        Session {
            user: Some(user),
            ..Session::default()
        }
    }

    /// A login or registration started. Returns the epoch to finish it with.
    pub fn begin(&mut self) -> u64 {
        self.pending += 1;
        self.epoch
    }

    /// True while no `clear()` has happened since `epoch` was handed out.
    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    /// ## Errors
    /// - `Superseded` when the session was cleared after the attempt began
    pub fn succeed(&mut self, epoch: u64, user: User) -> Result<(), AuthError> {
        if !self.is_current(epoch) {
            return Err(AuthError::Superseded);
        }
        self.user = Some(user);
        self.finish();
        Ok(())
    }

    /// A login failed. Whoever was logged in before stays logged in.
    pub fn fail(&mut self, epoch: u64) {
        if self.is_current(epoch) {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    /// Logout.
    pub fn clear(&mut self) {
        self.user = None;
        self.pending = 0;
        self.epoch = self.epoch.wrapping_add(1);
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The logged-in user, or `NotAuthenticated` naming what was attempted.
    pub fn require_user(&self, action: &str) -> Result<&User, AuthError> {
        self.user
            .as_ref()
            .ok_or_else(|| AuthError::login_required(action))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user: self.user.clone(),
            is_loading: self.is_loading(),
            is_authenticated: self.is_authenticated(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> RegistrationInput {
        RegistrationInput {
            name: "Sam Renter".to_string(),
            email: "sam@example.com".to_string(),
            password: "secret1".to_string(),
            phone: None,
            role: None,
        }
    }

    #[test]
    fn test_authenticate_each_demo_account() {
        let admin = authenticate("admin@carrental.com", "admin123").unwrap();
        assert_eq!((admin.id.as_str(), admin.role), ("1", Role::Admin));

        let seller = authenticate("seller@carrental.com", "seller123").unwrap();
        assert_eq!(seller.name, "John Seller");

        let user = authenticate("user@carrental.com", "user123").unwrap();
        assert_eq!(user.id, "3");
        assert_eq!(user.name, "Jane User");
    }

    #[test]
    fn test_authenticate_rejects_bad_password_and_unknown_email() {
        assert_eq!(
            authenticate("user@carrental.com", "admin123"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            authenticate("nobody@carrental.com", "user123"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_registration_defaults_role_to_user() {
        let user = registration().into_user().unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.email, "sam@example.com");
        assert!(Uuid::parse_str(&user.id).is_ok());
    }

    #[test]
    fn test_registration_validation() {
        let mut short = registration();
        short.password = "abc".to_string();
        assert!(matches!(
            short.validate(),
            Err(ValidationError::TooShort { .. })
        ));

        let mut nameless = registration();
        nameless.name = " ".to_string();
        assert!(nameless.validate().is_err());

        let mut bad_email = registration();
        bad_email.email = "sam".to_string();
        assert!(bad_email.validate().is_err());

        let mut admin = registration();
        admin.role = Some(Role::Admin);
        assert!(matches!(
            admin.into_user(),
            Err(AuthError::Registration(ValidationError::NotAllowed { .. }))
        ));
    }

    #[test]
    fn test_registration_rejects_unknown_fields() {
        let json = r#"{"name":"Sam","email":"sam@example.com","password":"secret1","verified":true}"#;
        assert!(serde_json::from_str::<RegistrationInput>(json).is_err());

        let json = r#"{"name":"Sam","email":"sam@example.com","password":"secret1","role":"seller"}"#;
        let input: RegistrationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.role, Some(Role::Seller));
    }

    #[test]
    fn test_session_transitions() {
        let mut session = Session::new();
        assert!(!session.is_authenticated());

        let epoch = session.begin();
        assert!(session.is_loading());

        let user = authenticate("user@carrental.com", "user123").unwrap();
        session.succeed(epoch, user.clone()).unwrap();
        assert!(!session.is_loading());
        assert_eq!(session.user(), Some(&user));

        let epoch = session.begin();
        session.fail(epoch);
        assert_eq!(session.user(), Some(&user));

        session.clear();
        assert!(session.user().is_none());
        assert_eq!(
            session.require_user("book a vehicle"),
            Err(AuthError::login_required("book a vehicle"))
        );
    }

    #[test]
    fn test_failed_attempt_leaves_other_pending_attempt_loading() {
        let mut session = Session::new();
        let first = session.begin();
        let second = session.begin();

        session.fail(second);
        assert!(session.is_loading());

        let user = authenticate("user@carrental.com", "user123").unwrap();
        session.succeed(first, user).unwrap();
        assert!(!session.is_loading());
    }

    #[test]
    fn test_clear_supersedes_pending_attempt() {
        let mut session = Session::new();
        let epoch = session.begin();
        session.clear();
        assert!(!session.is_loading());

        // a newer attempt is not disturbed by the stale one finishing
        let newer = session.begin();
        session.fail(epoch);
        assert!(session.is_loading());

        let user = authenticate("user@carrental.com", "user123").unwrap();
        assert_eq!(session.succeed(epoch, user.clone()), Err(AuthError::Superseded));
        assert!(session.user().is_none());

        session.succeed(newer, user).unwrap();
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_snapshot_serialization() {
        let session = Session::restored(authenticate("user@carrental.com", "user123").unwrap());
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["isAuthenticated"], true);
        assert_eq!(json["user"]["role"], "user");
    }
}
