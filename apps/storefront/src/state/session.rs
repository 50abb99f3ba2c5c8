//! # Session State
//!
//! Who is logged in, mirrored to the `auth_user` storage record.
//!
//! ## Login Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Login / Register                                │
//! │                                                                         │
//! │  begin()  ──► is_loading = true, epoch noted                            │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  sleep(auth_latency)        (no lock held)                              │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  authenticate / validate ──── Err ──► fail(epoch)  ──► ApiError         │
//! │     │ Ok                                                                │
//! │     ▼                                                                   │
//! │  [store lock] epoch still current? ── no ──► Superseded                 │
//! │     │ yes                                                               │
//! │     ▼                                                                   │
//! │  save auth_user ─────────────────────► succeed(epoch, user) ──► User    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `logout` takes the same store lock, so a logout during the wait wins and
//! the storage record always matches the in-memory user.
//!
//! ## Restore
//! The stored user is trusted as-is on startup; it is not re-checked against
//! the credential table.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tracing::{info, warn};

use rental_core::session::{authenticate, RegistrationInput, SessionSnapshot};
use rental_core::{AuthError, Session, User};
use rental_db::{Database, SessionRecordRepository};

use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
    store: SessionRecordRepository,
    store_lock: Arc<tokio::sync::Mutex<()>>,
    latency: Duration,
}

impl SessionState {
    /// Restores the session from storage.
    ///
    /// An unreadable record is removed and the session starts logged out.
    pub async fn restore(db: &Database, latency: Duration) -> Result<Self, ApiError> {
        let store = db.session_record();

        let session = match store.load().await {
            Ok(Some(user)) => {
                info!(user_id = %user.id, role = %user.role, "Session restored");
                Session::restored(user)
            }
            Ok(None) => Session::new(),
            Err(e) if e.is_corrupt_record() => {
                warn!(error = %e, "Discarding unreadable session record");
                store.clear().await?;
                Session::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(SessionState {
            session: Arc::new(Mutex::new(session)),
            store,
            store_lock: Arc::new(tokio::sync::Mutex::new(())),
            latency,
        })
    }

    fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }

    /// Checks the credentials after the simulated round trip.
    ///
    /// A failed attempt leaves any previous session in place.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let epoch = self.with_session_mut(Session::begin);
        tokio::time::sleep(self.latency).await;

        match authenticate(email, password) {
            Ok(user) => self.establish(epoch, user).await,
            Err(e) => {
                self.with_session_mut(|s| s.fail(epoch));
                warn!(email = %email, "Login failed");
                Err(e.into())
            }
        }
    }

    /// Creates an account and logs it in.
    pub async fn register(&self, input: RegistrationInput) -> Result<User, ApiError> {
        let epoch = self.with_session_mut(Session::begin);
        tokio::time::sleep(self.latency).await;

        match input.into_user() {
            Ok(user) => {
                info!(user_id = %user.id, role = %user.role, "Account registered");
                self.establish(epoch, user).await
            }
            Err(e) => {
                self.with_session_mut(|s| s.fail(epoch));
                warn!(error = %e, "Registration rejected");
                Err(e.into())
            }
        }
    }

    async fn establish(&self, epoch: u64, user: User) -> Result<User, ApiError> {
        let _storing = self.store_lock.lock().await;

        if !self.with_session(|s| s.is_current(epoch)) {
            warn!(user_id = %user.id, "Login superseded by logout");
            return Err(AuthError::Superseded.into());
        }

        if let Err(e) = self.store.save(&user).await {
            self.with_session_mut(|s| s.fail(epoch));
            return Err(e.into());
        }

        // only logout bumps the epoch, and it waits on the store lock
        self.with_session_mut(|s| s.succeed(epoch, user.clone()))?;
        info!(user_id = %user.id, role = %user.role, "Logged in");
        Ok(user)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let _storing = self.store_lock.lock().await;

        let user_id = self.with_session_mut(|s| {
            let id = s.user().map(|u| u.id.clone());
            s.clear();
            id
        });

        self.store.clear().await?;

        if let Some(id) = user_id {
            info!(user_id = %id, "Logged out");
        }
        Ok(())
    }

    pub fn current_user(&self) -> Option<User> {
        self.with_session(|s| s.user().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.with_session(Session::is_authenticated)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.with_session(Session::snapshot)
    }

    /// The logged-in user, or `UNAUTHORIZED` with "Please login to {action}".
    pub fn require_user(&self, action: &str) -> Result<User, ApiError> {
        self.with_session(|s| s.require_user(action).cloned())
            .map_err(ApiError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use rental_core::Role;
    use rental_db::DbConfig;

    async fn state(latency_ms: u64) -> (SessionState, Database) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let state = SessionState::restore(&db, Duration::from_millis(latency_ms))
            .await
            .unwrap();
        (state, db)
    }

    #[tokio::test]
    async fn test_login_success_persists_user() {
        let (state, db) = state(0).await;

        let user = state.login("user@carrental.com", "user123").await.unwrap();
        assert_eq!(user.id, "3");
        assert!(state.is_authenticated());
        assert_eq!(db.session_record().load().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_bad_password_keeps_previous_session() {
        let (state, _db) = state(0).await;
        state.login("seller@carrental.com", "seller123").await.unwrap();

        let err = state.login("admin@carrental.com", "nope").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthenticationError);

        let snapshot = state.snapshot();
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.user.map(|u| u.role), Some(Role::Seller));
    }

    #[tokio::test]
    async fn test_loading_while_pending() {
        let (state, _db) = state(100).await;

        let pending = {
            let state = state.clone();
            tokio::spawn(async move { state.login("user@carrental.com", "user123").await })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(state.snapshot().is_loading);
        assert!(!state.is_authenticated());

        pending.await.unwrap().unwrap();
        assert!(!state.snapshot().is_loading);
        assert!(state.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_during_pending_login_wins() {
        let (state, db) = state(100).await;

        let pending = {
            let state = state.clone();
            tokio::spawn(async move { state.login("user@carrental.com", "user123").await })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        state.logout().await.unwrap();
        assert!(!state.snapshot().is_loading);

        let err = pending.await.unwrap().unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthenticationError);
        assert!(!state.is_authenticated());
        assert_eq!(db.session_record().load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_register_defaults_to_user_role() {
        let (state, _db) = state(0).await;

        let input = RegistrationInput {
            name: "Sam Renter".to_string(),
            email: "sam@example.com".to_string(),
            password: "secret1".to_string(),
            phone: None,
            role: None,
        };
        let user = state.register(input).await.unwrap();

        assert_eq!(user.role, Role::User);
        assert_eq!(state.current_user(), Some(user));
    }

    #[tokio::test]
    async fn test_register_short_password_rejected() {
        let (state, _db) = state(0).await;

        let input = RegistrationInput {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            password: "12345".to_string(),
            phone: None,
            role: None,
        };
        let err = state.register(input).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(!state.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_clears_record() {
        let (state, db) = state(0).await;
        state.login("user@carrental.com", "user123").await.unwrap();

        state.logout().await.unwrap();
        assert!(!state.is_authenticated());
        assert_eq!(db.session_record().load().await.unwrap(), None);

        let err = state.require_user("add to wishlist").unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(err.message, "Please login to add to wishlist");
    }

    #[tokio::test]
    async fn test_corrupt_record_discarded() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.local_storage().set("auth_user", "not json").await.unwrap();

        let state = SessionState::restore(&db, Duration::ZERO).await.unwrap();
        assert!(!state.is_authenticated());
        assert_eq!(db.local_storage().get("auth_user").await.unwrap(), None);
    }
}
