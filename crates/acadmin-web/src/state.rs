//! Shared application state for the web shell.

use std::sync::Arc;

use acadmin_client::RecordsClient;

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub api: RecordsClient,
}

impl AppState {
    pub fn new(api: RecordsClient) -> Self {
        Self { api }
    }
}

pub type SharedState = Arc<AppState>;
