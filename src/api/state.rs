//! Application state for the API server

use crate::{Config, StreamService};
use std::sync::Arc;

/// Shared application state accessible to all route handlers
///
/// Cloned for each request (cheap Arc clone); provides access to the
/// service instance and configuration.
#[derive(Clone)]
pub struct AppState {
    /// The main StreamService instance
    pub service: Arc<StreamService>,

    /// Configuration (read access)
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service: Arc<StreamService>, config: Arc<Config>) -> Self {
        Self { service, config }
    }
}
