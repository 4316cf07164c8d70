//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No page is configured at the given slug.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Endpoint called outside development mode.
    #[error("This endpoint is only available in development mode")]
    DevelopmentOnly,

    /// Request body has the wrong shape.
    #[error("{0}")]
    BadRequest(String),

    /// Configuration document could not be loaded.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] tessera_site::LoadError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound(slug) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "slug": slug}),
            ),
            Self::DevelopmentOnly => (StatusCode::FORBIDDEN, json!({"error": self.to_string()})),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, json!({"error": message})),
            Self::Load(e) => {
                tracing::error!(error = %e, "Configuration load failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": e.to_string()}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
