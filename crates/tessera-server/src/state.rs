//! Application state.
//!
//! Shared state for all request handlers.

use tessera_sections::RenderMode;
use tessera_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Site backed by the configuration directory.
    pub(crate) site: Site,
    /// Application version for cache invalidation.
    pub(crate) version: String,
}

impl AppState {
    pub(crate) fn mode(&self) -> RenderMode {
        self.site.mode()
    }
}
