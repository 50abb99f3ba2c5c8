//! # Storefront Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     RENTAL_DB_PATH=/tmp/storefront.db                                  │
//! │     RENTAL_AUTH_LATENCY_MS=0                                           │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │     ~/Library/Application Support/com.rental.storefront/... (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! database_path = "/var/lib/storefront/storefront.db"
//! auth_latency_ms = 1000
//! toast_duration_ms = 3000
//! seed_catalog = true
//! ```
//!
//! Read-only after startup, so no mutex.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Longest simulated login round trip accepted.
const MAX_AUTH_LATENCY_MS: u64 = 60_000;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// SQLite file holding the local storage records.
    /// Default: `storefront.db` in the platform data dir
    pub database_path: Option<PathBuf>,

    /// Simulated round trip for login and registration.
    /// Default: 1000
    pub auth_latency_ms: u64,

    /// How long a toast stays visible.
    /// Default: 3000
    pub toast_duration_ms: u64,

    /// Load the mock vehicle listings into the catalog at startup.
    /// Default: true
    pub seed_catalog: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            database_path: None,
            auth_latency_ms: 1000,
            toast_duration_ms: 3000,
            seed_catalog: true,
        }
    }
}

impl StorefrontConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (explicit path, else `storefront.toml` in the config dir)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.database_path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("database_path must not be empty".into()));
            }
        }

        if self.auth_latency_ms > MAX_AUTH_LATENCY_MS {
            return Err(ConfigError::Invalid(format!(
                "auth_latency_ms must be at most {}",
                MAX_AUTH_LATENCY_MS
            )));
        }

        if self.toast_duration_ms == 0 {
            return Err(ConfigError::Invalid(
                "toast_duration_ms must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `RENTAL_*` overrides from `lookup`. Unparseable values are
    /// logged and skipped.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("RENTAL_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.database_path = Some(PathBuf::from(path));
        }

        if let Some(value) = lookup("RENTAL_AUTH_LATENCY_MS") {
            match value.parse() {
                Ok(ms) => self.auth_latency_ms = ms,
                Err(_) => warn!(value = %value, "Ignoring invalid RENTAL_AUTH_LATENCY_MS"),
            }
        }

        if let Some(value) = lookup("RENTAL_TOAST_MS") {
            match value.parse() {
                Ok(ms) => self.toast_duration_ms = ms,
                Err(_) => warn!(value = %value, "Ignoring invalid RENTAL_TOAST_MS"),
            }
        }

        if let Some(value) = lookup("RENTAL_SEED_CATALOG") {
            match value.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.seed_catalog = true,
                "0" | "false" | "no" => self.seed_catalog = false,
                _ => warn!(value = %value, "Ignoring invalid RENTAL_SEED_CATALOG"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "rental", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    /// The database file to open, creating the platform data dir if needed.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.rental.storefront/storefront.db`
    /// - **Windows**: `%APPDATA%\rental\storefront\data\storefront.db`
    /// - **Linux**: `~/.local/share/storefront/storefront.db`
    pub fn resolve_database_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        let dirs = directories::ProjectDirs::from("com", "rental", "storefront").ok_or_else(|| {
            ConfigError::Invalid("could not determine app data directory".into())
        })?;

        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join("storefront.db"))
    }

    pub fn auth_latency(&self) -> Duration {
        Duration::from_millis(self.auth_latency_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}
