//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! server keeps no mutable state; it only carries the parsed configuration.

use std::sync::Arc;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}
