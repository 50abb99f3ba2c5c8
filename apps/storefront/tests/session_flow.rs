//! Login, restart and restore against one in-memory database.

use std::time::{Duration, Instant};

use rental_core::Role;
use rental_db::{Database, DbConfig};
use rental_storefront::commands::auth;
use rental_storefront::error::ErrorCode;
use rental_storefront::notification::ToastKind;
use rental_storefront::state::StorefrontConfig;
use rental_storefront::AppState;

fn config(auth_latency_ms: u64) -> StorefrontConfig {
    StorefrontConfig {
        auth_latency_ms,
        ..StorefrontConfig::default()
    }
}

#[tokio::test]
async fn test_login_restored_after_restart() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    let app = AppState::new(config(0), db.clone()).await.unwrap();
    let user = auth::login(&app.session, &app.notifications, "seller@carrental.com", "seller123")
        .await
        .unwrap();
    assert_eq!(user.role, Role::Seller);
    drop(app);

    let restarted = AppState::new(config(0), db).await.unwrap();
    let snapshot = auth::current_user(&restarted.session);

    assert!(snapshot.is_authenticated);
    assert_eq!(snapshot.user, Some(user));
}

#[tokio::test]
async fn test_logout_survives_restart() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    let app = AppState::new(config(0), db.clone()).await.unwrap();
    auth::login(&app.session, &app.notifications, "user@carrental.com", "user123")
        .await
        .unwrap();
    auth::logout(&app.session).await.unwrap();
    drop(app);

    let restarted = AppState::new(config(0), db).await.unwrap();
    assert!(!auth::current_user(&restarted.session).is_authenticated);
}

#[tokio::test]
async fn test_bad_password_waits_then_fails() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let app = AppState::new(config(50), db).await.unwrap();

    let started = Instant::now();
    let err = auth::login(&app.session, &app.notifications, "admin@carrental.com", "admin")
        .await
        .unwrap_err();

    assert!(started.elapsed() >= Duration::from_millis(50));
    assert_eq!(err.code, ErrorCode::AuthenticationError);
    assert!(!app.session.is_authenticated());

    let toast = app.notifications.current().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Invalid credentials");
}

#[tokio::test]
async fn test_registered_user_is_restored() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let app = AppState::new(config(0), db.clone()).await.unwrap();

    let input = serde_json::from_value(serde_json::json!({
        "name": "Casey Driver",
        "email": "casey@example.com",
        "password": "hunter22",
        "role": "seller"
    }))
    .unwrap();
    let user = auth::register(&app.session, &app.notifications, input).await.unwrap();
    drop(app);

    let restarted = AppState::new(config(0), db).await.unwrap();
    assert_eq!(restarted.session.current_user(), Some(user));
}

#[tokio::test]
async fn test_admin_self_registration_rejected() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let app = AppState::new(config(0), db).await.unwrap();

    let input = serde_json::from_value(serde_json::json!({
        "name": "Mallory",
        "email": "mallory@example.com",
        "password": "hunter22",
        "role": "admin"
    }))
    .unwrap();
    let err = auth::register(&app.session, &app.notifications, input).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationError);
    assert!(!app.session.is_authenticated());
}

#[tokio::test]
async fn test_register_command_rejects_unknown_field() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let app = AppState::new(config(0), db).await.unwrap();

    let payload = serde_json::json!({
        "input": {
            "name": "Casey Driver",
            "email": "casey@example.com",
            "password": "hunter22",
            "isAdmin": true
        }
    });
    let err = rental_storefront::commands::invoke(&app, "register", payload)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationError);
    assert_eq!(err.message, "unknown field: isAdmin");
    assert!(!app.session.is_authenticated());
}
