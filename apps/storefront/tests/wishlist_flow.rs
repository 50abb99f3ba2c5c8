//! Wishlist toggling, persistence across restarts, and the login guard.

use rental_core::WishlistChange;
use rental_db::{Database, DbConfig};
use rental_storefront::commands::{auth, wishlist};
use rental_storefront::error::ErrorCode;
use rental_storefront::notification::ToastKind;
use rental_storefront::state::StorefrontConfig;
use rental_storefront::AppState;

fn config() -> StorefrontConfig {
    StorefrontConfig {
        auth_latency_ms: 0,
        ..StorefrontConfig::default()
    }
}

async fn logged_in(db: &Database) -> AppState {
    let app = AppState::new(config(), db.clone()).await.unwrap();
    auth::login(&app.session, &app.notifications, "user@carrental.com", "user123")
        .await
        .unwrap();
    app
}

#[tokio::test]
async fn test_logged_out_toggle_is_refused() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let app = AppState::new(config(), db).await.unwrap();

    let err = wishlist::toggle_wishlist(&app.session, &app.catalog, &app.notifications, "4")
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::Unauthorized);
    let toast = app.notifications.current().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Please login to add to wishlist");
    assert!(wishlist::get_wishlist(&app.catalog).is_empty());
}

#[tokio::test]
async fn test_wishlist_persists_across_restart() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let app = logged_in(&db).await;

    for id in ["9", "4", "12"] {
        let toggle = wishlist::toggle_wishlist(&app.session, &app.catalog, &app.notifications, id)
            .await
            .unwrap();
        assert_eq!(toggle.change, WishlistChange::Added);
    }
    assert_eq!(app.notifications.current().unwrap().message, "Added to wishlist");
    drop(app);

    let restarted = AppState::new(config(), db).await.unwrap();
    assert_eq!(restarted.catalog.wishlist_ids(), ["9", "4", "12"]);

    // the wishlist tab shows catalog order
    let shown: Vec<String> = wishlist::get_wishlist(&restarted.catalog)
        .into_iter()
        .map(|v| v.id)
        .collect();
    assert_eq!(shown, ["4", "9", "12"]);
}

#[tokio::test]
async fn test_toggle_twice_restores_wishlist() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let app = logged_in(&db).await;

    wishlist::toggle_wishlist(&app.session, &app.catalog, &app.notifications, "2")
        .await
        .unwrap();
    let before = app.catalog.wishlist_ids();

    let first = wishlist::toggle_wishlist(&app.session, &app.catalog, &app.notifications, "7")
        .await
        .unwrap();
    let second = wishlist::toggle_wishlist(&app.session, &app.catalog, &app.notifications, "7")
        .await
        .unwrap();

    assert_eq!(first.change, WishlistChange::Added);
    assert_eq!(second.change, WishlistChange::Removed);
    assert_eq!(second.wishlist, before);
    assert_eq!(app.notifications.current().unwrap().message, "Removed from wishlist");
    assert_eq!(db.wishlist().load().await.unwrap().ids(), ["2"]);
}
