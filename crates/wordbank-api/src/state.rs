//! Shared application state for the word API.
//!
//! [`AppState`] holds the [`WordService`] built over the store that `main`
//! constructed at startup. It is wrapped in [`Arc`](std::sync::Arc) and
//! injected via Axum's `State` extractor.

use std::sync::Arc;

use wordbank_store::WordStore;

use crate::service::WordService;

/// Shared state for the Axum application.
#[derive(Debug)]
pub struct AppState<S> {
    /// Word operations over the configured store.
    pub words: WordService<S>,
}

impl<S: WordStore> AppState<S> {
    /// Create application state over a store.
    pub const fn new(store: Arc<S>) -> Self {
        Self {
            words: WordService::new(store),
        }
    }
}
