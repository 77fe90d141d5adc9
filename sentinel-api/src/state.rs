//! Shared application state for Axum routers.

use std::sync::Arc;
use std::time::Instant;

use sentinel_queue::TaskQueue;
use sentinel_storage::InvestigationStore;

/// Application-wide state shared across all routes.
///
/// The store and queue are constructed once at startup and injected here;
/// handlers extract them via `FromRef`. The same store instance is shared
/// with the worker pool.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn InvestigationStore>,
    pub queue: Arc<dyn TaskQueue>,
    pub start_time: Instant,
}

impl AppState {
    /// Create application state from injected collaborators.
    pub fn new(store: Arc<dyn InvestigationStore>, queue: Arc<dyn TaskQueue>) -> Self {
        Self {
            store,
            queue,
            start_time: Instant::now(),
        }
    }
}

// Use macro to reduce boilerplate for FromRef implementations
crate::impl_from_ref!(Arc<dyn InvestigationStore>, store);
crate::impl_from_ref!(Arc<dyn TaskQueue>, queue);
crate::impl_from_ref!(Instant, start_time);
