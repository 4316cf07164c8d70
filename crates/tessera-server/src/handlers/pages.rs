//! Page rendering endpoint.
//!
//! Serves full HTML documents for configured slugs.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use md5::{Digest, Md5};
use tessera_site::PageOutcome;

use crate::state::AppState;

/// Handle GET /.
pub(crate) async fn get_root_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    get_page_impl("/", &state, &headers)
}

/// Handle GET /{*path}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    get_page_impl(&path, &state, &headers)
}

fn get_page_impl(slug: &str, state: &AppState, headers: &HeaderMap) -> Response {
    match state.site.render(slug) {
        PageOutcome::Page(page) => {
            let etag = compute_etag(&state.version, &page.html);

            if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
                && if_none_match.as_bytes() == etag.as_bytes()
            {
                return (StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response();
            }

            (
                [
                    (header::ETAG, etag),
                    (header::CACHE_CONTROL, "no-cache".to_owned()),
                ],
                Html(page.html),
            )
                .into_response()
        }
        PageOutcome::NotFound(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        PageOutcome::Fallback(html) => {
            ([(header::CACHE_CONTROL, "no-store")], Html(html)).into_response()
        }
    }
}

/// Compute `ETag` from version and content.
///
/// MD5 truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
