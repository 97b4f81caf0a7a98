//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::config::ApiConfig;
use crate::query::QueryEngine;
use std::sync::Arc;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Query engine over the climate store
    pub engine: Arc<QueryEngine>,
    /// API configuration
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(engine: Arc<QueryEngine>, config: ApiConfig) -> Self {
        Self {
            engine,
            config: Arc::new(config),
        }
    }
}
