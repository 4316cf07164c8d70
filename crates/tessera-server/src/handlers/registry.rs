//! Section registry endpoint.
//!
//! Without a query this lists the registered section types (development
//! only). With `?slug=` it returns a page's data without its sections.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tessera_sections::RegistryReport;

use crate::error::ServerError;
use crate::handlers::ApiResponse;
use crate::state::AppState;

/// Query parameters for GET /api/registry.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RegistryQuery {
    slug: Option<String>,
}

/// Handle GET /api/registry.
pub(crate) async fn get_registry(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RegistryQuery>,
) -> Result<Response, ServerError> {
    if let Some(slug) = query.slug {
        let summary = state
            .site
            .page_summary(&slug)?
            .ok_or(ServerError::PageNotFound(slug))?;
        return Ok(Json(ApiResponse::ok(summary)).into_response());
    }

    if !state.mode().is_development() {
        return Err(ServerError::DevelopmentOnly);
    }
    let report = RegistryReport::new(state.site.registry());
    Ok(Json(ApiResponse::ok(report)).into_response())
}
