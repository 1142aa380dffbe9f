//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use zeroize::Zeroizing;

use crate::store::{InMemoryRecordStore, RecordStore};

/// Application state shared across all request handlers.
///
/// All fields are `Arc`-wrapped so that Axum can clone the state for each
/// request without copying expensive data.
#[derive(Clone)]
pub struct AppState {
    /// Where encrypted records are kept.
    pub store: Arc<dyn RecordStore>,
    /// Hex master key, handed to the envelope layer on each call.
    pub master_key_hex: Arc<Zeroizing<String>>,
}

impl AppState {
    /// Create a new [`AppState`] with the provided store and master key.
    pub fn new(store: Arc<dyn RecordStore>, master_key_hex: Zeroizing<String>) -> Self {
        Self {
            store,
            master_key_hex: Arc::new(master_key_hex),
        }
    }
}

impl Default for AppState {
    /// Creates an [`AppState`] with an empty in-memory store and a fixed
    /// all-zero key, suitable for tests.
    fn default() -> Self {
        Self::new(
            Arc::new(InMemoryRecordStore::new()),
            Zeroizing::new("00".repeat(32)),
        )
    }
}
