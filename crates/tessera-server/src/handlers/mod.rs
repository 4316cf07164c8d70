//! HTTP request handlers.

use serde::Serialize;

pub(crate) mod config;
pub(crate) mod pages;
pub(crate) mod registry;
pub(crate) mod validate;

/// Envelope for successful API responses.
#[derive(Serialize)]
pub(crate) struct ApiResponse<T> {
    success: bool,
    data: T,
}

impl<T> ApiResponse<T> {
    pub(crate) fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
