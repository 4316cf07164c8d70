//! Section validation endpoint (development only).

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;
use serde_json::Value;
use tessera_sections::{Section, ValidationReport, health_report, validate_sections};

use crate::error::ServerError;
use crate::handlers::ApiResponse;
use crate::state::AppState;

const INVALID_BODY: &str = "Invalid request body. Expected { sections: [...] }";

/// Response data for POST /api/validate.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ValidateResponse {
    validation: ValidationReport,
    health_report: String,
}

/// Handle POST /api/validate.
pub(crate) async fn post_validate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiResponse<ValidateResponse>>, ServerError> {
    if !state.mode().is_development() {
        return Err(ServerError::DevelopmentOnly);
    }

    let Ok(Json(mut body)) = body else {
        return Err(ServerError::BadRequest(INVALID_BODY.to_owned()));
    };
    let sections = match body.get_mut("sections").map(Value::take) {
        Some(Value::Array(items)) => items.into_iter().map(Section::from).collect::<Vec<_>>(),
        _ => return Err(ServerError::BadRequest(INVALID_BODY.to_owned())),
    };

    let registry = state.site.registry();
    let validation = validate_sections(registry, &sections);
    tracing::debug!(
        total = validation.total_sections,
        invalid = validation.invalid_sections,
        "Validated sections"
    );
    Ok(Json(ApiResponse::ok(ValidateResponse {
        validation,
        health_report: health_report(registry, &sections),
    })))
}
