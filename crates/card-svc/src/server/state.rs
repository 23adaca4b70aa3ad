//! Shared application state injected into every Axum handler.

use crate::store::CardStore;

/// Application state shared across all request handlers.
///
/// Cheaply cloneable (`Arc`-backed) so that Axum can clone the state for
/// each request without copying the card collection.
#[derive(Clone)]
pub struct AppState {
    /// Mutex-guarded store of live cards and the next-id counter.
    pub store: CardStore,
}

impl AppState {
    /// Create a new [`AppState`] wrapping the provided store.
    pub fn new(store: CardStore) -> Self {
        Self { store }
    }
}

impl Default for AppState {
    /// Creates an [`AppState`] over a freshly seeded store, suitable for tests.
    fn default() -> Self {
        Self::new(CardStore::seeded())
    }
}
