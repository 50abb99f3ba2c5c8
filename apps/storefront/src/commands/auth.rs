//! # Auth Commands
//!
//! Login page, registration page and the navbar's logout button.

use tracing::debug;

use rental_core::session::{RegistrationInput, SessionSnapshot};
use rental_core::User;

use crate::error::ApiError;
use crate::notification::NotificationCenter;
use crate::state::SessionState;

/// Signs in with one of the demo accounts.
///
/// ## Returns
/// The user on success. A wrong email or password fails with
/// `AUTHENTICATION_ERROR` and an error toast.
pub async fn login(
    session: &SessionState,
    notifications: &NotificationCenter,
    email: &str,
    password: &str,
) -> Result<User, ApiError> {
    debug!(email = %email, "login command");

    session.login(email, password).await.inspect_err(|e| {
        notifications.error(e.message.clone());
    })
}

/// Creates an account and signs it in. Rejections show an error toast.
pub async fn register(
    session: &SessionState,
    notifications: &NotificationCenter,
    input: RegistrationInput,
) -> Result<User, ApiError> {
    debug!(email = %input.email, "register command");

    session.register(input).await.inspect_err(|e| {
        notifications.error(e.message.clone());
    })
}

pub async fn logout(session: &SessionState) -> Result<(), ApiError> {
    debug!("logout command");
    session.logout().await
}

/// Navbar state: who is logged in and whether a login is pending.
pub fn current_user(session: &SessionState) -> SessionSnapshot {
    session.snapshot()
}
