//! Shared application state for Axum handlers.
//!
//! The state is cloned into every handler. It carries the product store
//! handle, the runtime configuration and the process start time. Tests build
//! their own state around an isolated store instead of sharing one.

use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::store::ProductStore;

/// Shared application state for Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Product catalog
    pub store: ProductStore,
    /// Application configuration
    pub config: Arc<Config>,
    /// Timestamp when the state was created
    pub started_at: Instant,
}

impl AppState {
    /// Create state around an existing store.
    pub fn new(store: ProductStore, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }

    /// State backed by the seeded demonstration catalog.
    pub fn seeded(config: Config) -> Self {
        Self::new(ProductStore::seeded(), config)
    }

    /// Seconds since the state was created.
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
