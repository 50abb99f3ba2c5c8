//! # Rental Storefront Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration
//! 3. Connect to the database & run migrations
//! 4. Restore session and wishlist
//! 5. Serve commands over stdin/stdout
//!
//! The setup lives in lib.rs so the integration tests can drive it.

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    rental_storefront::run().await
}
