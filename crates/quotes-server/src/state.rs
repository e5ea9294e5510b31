//! Server state management.

use std::sync::Arc;

use quotes_core::{InMemoryQuoteStore, QuoteStore};

/// Shared application state.
///
/// Holds the store behind the `QuoteStore` trait so handlers never depend on
/// the in-memory implementation directly.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn QuoteStore>,
}

impl AppState {
    /// Create state backed by a freshly seeded in-memory store.
    pub fn seeded() -> Self {
        Self {
            store: Arc::new(InMemoryQuoteStore::with_seed()),
        }
    }

    /// Create state with a caller-supplied store.
    pub fn with_store(store: Arc<dyn QuoteStore>) -> Self {
        Self { store }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::seeded()
    }
}
