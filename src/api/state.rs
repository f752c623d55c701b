//! Application state for the Attendance and Payroll Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::AttendanceStore;

/// Shared application state.
///
/// Holds the record store behind an `Arc`, so handlers share one
/// authoritative store regardless of how many times the state is cloned.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn AttendanceStore>,
}

impl AppState {
    /// Creates a new application state around the given store.
    pub fn new(store: Arc<dyn AttendanceStore>) -> Self {
        Self { store }
    }

    /// Returns a reference to the record store.
    pub fn store(&self) -> &dyn AttendanceStore {
        self.store.as_ref()
    }
}
