//! # Rental Storefront Library
//!
//! State containers and commands behind the storefront views, plus the
//! line-delimited JSON loop the binary serves them over.
//!
//! ## Module Organization
//! ```text
//! rental_storefront/
//! ├── lib.rs            ◄─── You are here (AppState, startup, command loop)
//! ├── state/
//! │   ├── mod.rs        ◄─── State type exports
//! │   ├── catalog.rs    ◄─── Catalog + persisted wishlist
//! │   ├── booking.rs    ◄─── Booking ledger
//! │   ├── session.rs    ◄─── Login state + persisted auth_user
//! │   └── config.rs     ◄─── StorefrontConfig (TOML + env)
//! ├── commands/         ◄─── One module per view area
//! ├── notification.rs   ◄─── Toasts with auto-dismiss timers
//! └── error.rs          ◄─── API error type for commands
//! ```
//!
//! ## State Ownership
//! `AppState` owns one container per concern and hands each command only
//! the containers it needs. There are no globals.

pub mod commands;
pub mod error;
pub mod notification;
pub mod state;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rental_core::seed;
use rental_db::{Database, DbConfig};

use error::ApiError;
use notification::NotificationCenter;
use state::{BookingState, CatalogState, SessionState, StorefrontConfig};

/// Everything the views talk to.
#[derive(Debug)]
pub struct AppState {
    pub config: StorefrontConfig,
    /// Kept for shutdown. The containers hold their own repository handles.
    pub db: Database,
    pub catalog: CatalogState,
    pub bookings: BookingState,
    pub session: SessionState,
    pub notifications: NotificationCenter,
}

impl AppState {
    /// Builds the containers and restores the session and wishlist from
    /// `db`.
    pub async fn new(config: StorefrontConfig, db: Database) -> Result<Self, ApiError> {
        let vehicles = if config.seed_catalog {
            seed::mock_vehicles()
        } else {
            Vec::new()
        };

        let catalog = CatalogState::restore(vehicles, &db).await?;
        let session = SessionState::restore(&db, config.auth_latency()).await?;
        let notifications = NotificationCenter::new(config.toast_duration());

        Ok(AppState {
            config,
            db,
            catalog,
            bookings: BookingState::new(),
            session,
            notifications,
        })
    }
}

/// Runs the storefront.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → storefront.toml → RENTAL_* env                         │
/// │     • first CLI argument overrides the config file path                 │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode, pending migrations applied                  │
/// │                                                                         │
/// │  4. Restore State ────────────────────────────────────────────────────► │
/// │     • auth_user → SessionState, wishlist → CatalogState                 │
/// │                                                                         │
/// │  5. Serve Commands ───────────────────────────────────────────────────► │
/// │     • one JSON request per stdin line, one response per stdout line     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting rental storefront");

    let config = StorefrontConfig::load(std::env::args_os().nth(1).map(PathBuf::from))?;
    let db_path = config.resolve_database_path()?;
    info!(?db_path, "Database path determined");

    let db = Database::new(DbConfig::new(db_path)).await?;
    info!("Database connected and migrations applied");

    let app = AppState::new(config, db).await?;
    info!("State initialized");

    serve(&app, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;

    app.db.close().await;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=rental_storefront=trace` - Trace for the app only
/// - Default: INFO, DEBUG for the rental crates
///
/// Logs go to stderr; stdout carries command responses.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rental=debug,sqlx=warn"));

    // a subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

// =============================================================================
// Command Loop
// =============================================================================

/// One line of input.
#[derive(Debug, Deserialize)]
struct Request {
    /// Echoed back so callers can match responses.
    #[serde(default)]
    id: Option<Value>,
    command: String,
    #[serde(default)]
    args: Value,
}

/// One line of output: `ok` on success, `error` on failure.
#[derive(Debug, Serialize)]
struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ok: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ApiError>,
}

/// Answers requests from `reader` until it closes.
///
/// ## Wire Format
/// ```text
/// → {"id":1,"command":"login","args":{"email":"user@carrental.com","password":"user123"}}
/// ← {"id":1,"ok":{"id":"3","email":"user@carrental.com","name":"Jane User","role":"user"}}
/// → {"id":2,"command":"get_vehicle","args":{"vehicleId":"404"}}
/// ← {"id":2,"error":{"code":"NOT_FOUND","message":"Vehicle not found: 404"}}
/// ```
pub async fn serve<R, W>(app: &AppState, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => {
                debug!(command = %request.command, "Handling request");
                match commands::invoke(app, &request.command, request.args).await {
                    Ok(value) => Response {
                        id: request.id,
                        ok: Some(value),
                        error: None,
                    },
                    Err(e) => Response {
                        id: request.id,
                        ok: None,
                        error: Some(e),
                    },
                }
            }
            Err(e) => Response {
                id: None,
                ok: None,
                error: Some(ApiError::from(e)),
            },
        };

        let mut text = serde_json::to_string(&response)?;
        text.push('\n');
        writer.write_all(text.as_bytes()).await?;
        writer.flush().await?;
    }

    info!("Input closed, shutting down");
    Ok(())
}
