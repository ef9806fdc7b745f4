//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedNetworkSource;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached network loader
    pub networks: Arc<CachedNetworkSource>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(networks: CachedNetworkSource) -> Self {
        Self {
            networks: Arc::new(networks),
        }
    }
}
