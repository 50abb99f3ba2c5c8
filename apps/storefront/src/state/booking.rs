//! # Booking State
//!
//! The in-memory booking ledger. Bookings are not persisted; they last as
//! long as the process.

use std::sync::{Arc, Mutex, PoisonError};

use rental_core::{Booking, BookingLedger, BookingRequest, Money};

use crate::error::ApiError;
use crate::state::CatalogState;

#[derive(Debug, Clone, Default)]
pub struct BookingState {
    ledger: Arc<Mutex<BookingLedger>>,
}

impl BookingState {
    pub fn new() -> Self {
        BookingState::default()
    }

    fn with_ledger<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BookingLedger) -> R,
    {
        let ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        f(&ledger)
    }

    fn with_ledger_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BookingLedger) -> R,
    {
        let mut ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut ledger)
    }

    /// Prices and records a booking against the current catalog.
    ///
    /// Lock order is catalog, then ledger.
    pub fn create(&self, request: BookingRequest, catalog: &CatalogState) -> Result<Booking, ApiError> {
        let booking = catalog.with_catalog(|c| self.with_ledger_mut(|l| l.create(request, c)))?;
        Ok(booking)
    }

    pub fn get(&self, id: &str) -> Option<Booking> {
        self.with_ledger(|l| l.get(id).cloned())
    }

    pub fn by_user(&self, user_id: &str) -> Vec<Booking> {
        self.with_ledger(|l| l.by_user(user_id))
    }

    pub fn total_spent(&self, user_id: &str) -> Money {
        self.with_ledger(|l| l.total_spent(user_id))
    }

    pub fn len(&self) -> usize {
        self.with_ledger(BookingLedger::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
