//! Response security headers.

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::HeaderName;
use tower_http::set_header::SetResponseHeaderLayer;

/// Content-Security-Policy for landing pages.
///
/// Section images, videos and contact forms may point at other hosts, so
/// those sources allow `https:`. Pages ship no scripts of their own beyond
/// same-origin ones and never open sockets.
const CSP: &str = "default-src 'self'; \
                   script-src 'self'; \
                   style-src 'self' 'unsafe-inline'; \
                   font-src 'self' data:; \
                   img-src 'self' data: https:; \
                   media-src 'self' https:; \
                   form-action 'self' https:; \
                   frame-ancestors 'none'";

/// Headers set on every response, in lowercase wire form.
const HEADERS: [(&str, &str); 3] = [
    ("content-security-policy", CSP),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
];

/// Wrap `router` so every response carries [`HEADERS`]. Values a handler
/// set for the same names are replaced.
pub(crate) fn with_security_headers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    HEADERS.into_iter().fold(router, |router, (name, value)| {
        router.layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    #[test]
    fn test_csp_value() {
        assert!(CSP.contains("default-src 'self'"));
        assert!(CSP.contains("img-src 'self' data: https:"));
        assert!(CSP.contains("frame-ancestors 'none'"));
        assert!(!CSP.contains("ws:"));
    }

    #[tokio::test]
    async fn test_handler_headers_are_overridden() {
        let router = with_security_headers(Router::new().route(
            "/",
            get(|| async { ([("x-frame-options", "SAMEORIGIN")], "ok").into_response() }),
        ));
        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.headers()["x-frame-options"], "DENY");
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        assert_eq!(response.headers()["content-security-policy"], CSP);
        assert_eq!(response.headers().get_all("x-frame-options").iter().count(), 1);
    }
}
