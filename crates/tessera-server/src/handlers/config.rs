//! Configuration status endpoint.
//!
//! Lets an open page poll for changes to the configuration document.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use tessera_site::ConfigStatus;

use crate::state::AppState;

/// Handle GET /api/config/check.
pub(crate) async fn get_config_check(State(state): State<Arc<AppState>>) -> Json<ConfigStatus> {
    Json(state.site.status())
}
