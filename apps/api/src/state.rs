use std::sync::Arc;

use crate::results::ResultStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable result persistence. Postgres when configured, in-memory otherwise.
    pub result_store: Arc<dyn ResultStore>,
}
