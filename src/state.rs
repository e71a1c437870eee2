use crate::config::AppConfig;
use std::sync::Arc;

/// Shared application state
///
/// Handlers are stateless; the state exists to thread the startup
/// configuration through the router and middleware.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
