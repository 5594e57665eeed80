//! Application state shared across all request handlers.

use std::sync::Arc;

use quire_core::PostStore;

use crate::config::Config;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Post persistence. Opened at startup and owned by `main`, which closes
    /// it after the server stops.
    pub store: Arc<dyn PostStore>,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state from an opened store and configuration.
    pub fn new(store: Arc<dyn PostStore>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
