//! # Notifications
//!
//! Transient toast messages ("Added to wishlist", "Please login to book a
//! vehicle"). One toast is visible at a time; a newer one replaces it.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  show(toast #1) ──► current = #1 ──► timer #1 (duration)               │
//! │                                          │                              │
//! │  show(toast #2) ──► abort timer #1       │                              │
//! │                     current = #2 ──► timer #2 ──► current = None       │
//! │                                                                         │
//! │  drop(center)   ──► abort pending timer                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// A visible toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    /// Increases with every toast shown by one center.
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u64,
}

/// Holds the visible toast and the timer that will clear it.
#[derive(Debug)]
pub struct NotificationCenter {
    current: Arc<Mutex<Option<Toast>>>,
    timer: Mutex<Option<JoinHandle<()>>>,
    default_duration: Duration,
    next_id: AtomicU64,
}

impl NotificationCenter {
    pub fn new(default_duration: Duration) -> Self {
        NotificationCenter {
            current: Arc::new(Mutex::new(None)),
            timer: Mutex::new(None),
            default_duration,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn success(&self, message: impl Into<String>) -> Toast {
        self.show(message, ToastKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> Toast {
        self.show(message, ToastKind::Error)
    }

    pub fn info(&self, message: impl Into<String>) -> Toast {
        self.show(message, ToastKind::Info)
    }

    pub fn show(&self, message: impl Into<String>, kind: ToastKind) -> Toast {
        self.show_for(message, kind, self.default_duration)
    }

    /// Replaces the visible toast and schedules its removal.
    ///
    /// Outside a tokio runtime the toast stays until replaced or dismissed.
    pub fn show_for(&self, message: impl Into<String>, kind: ToastKind, duration: Duration) -> Toast {
        let toast = Toast {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
            kind,
            duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
        };

        debug!(toast_id = toast.id, ?kind, message = %toast.message, "Showing toast");

        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(toast.clone());

        let mut timer = self.timer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = timer.take() {
            previous.abort();
        }

        *timer = match Handle::try_current() {
            Ok(handle) => {
                let current = Arc::clone(&self.current);
                let id = toast.id;
                Some(handle.spawn(async move {
                    tokio::time::sleep(duration).await;
                    let mut slot = current.lock().unwrap_or_else(PoisonError::into_inner);
                    // a newer toast may have replaced this one
                    if slot.as_ref().is_some_and(|t| t.id == id) {
                        *slot = None;
                    }
                }))
            }
            Err(_) => None,
        };

        toast
    }

    pub fn current(&self) -> Option<Toast> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Hides the visible toast now.
    pub fn dismiss(&self) {
        if let Some(timer) = self.timer.lock().unwrap_or_else(PoisonError::into_inner).take() {
            timer.abort();
        }
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl Drop for NotificationCenter {
    fn drop(&mut self) {
        let timer = self.timer.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(timer) = timer.take() {
            timer.abort();
        }
    }
}
