//! Application state for the HTTP server.

use crate::catalog::StarRecord;
use crate::config::SiteConfig;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Observer site, fixed for the life of the process
    pub site: Arc<SiteConfig>,
    /// The compiled-in star catalog
    pub catalog: &'static [StarRecord],
}

impl AppState {
    /// Create a new application state for the given site, serving the
    /// compiled-in catalog.
    pub fn new(site: SiteConfig) -> Self {
        Self {
            site: Arc::new(site),
            catalog: crate::catalog::BRIGHT_STARS,
        }
    }
}
