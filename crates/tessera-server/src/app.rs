//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/config/check", get(handlers::config::get_config_check))
        .route("/api/registry", get(handlers::registry::get_registry))
        .route("/api/validate", post(handlers::validate::post_validate));

    let routes = Router::new()
        .merge(api_routes)
        .route("/", get(handlers::pages::get_root_page))
        .route("/{*path}", get(handlers::pages::get_page));

    security::with_security_headers(routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::fs;
    use tessera_sections::RenderMode;
    use tessera_site::Site;
    use tower::ServiceExt;

    const CONFIG: &str = r"
site:
  name: Acme
pages:
  - slug: /
    title: Home
    sections:
      - type: hero
        props: {title: Welcome}
  - slug: /about
    title: About
    description: Who we are
    sections:
      - type: cta
        props: {title: Talk to us}
";

    fn router(config: Option<&str>, mode: RenderMode) -> (tempfile::TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        if let Some(config) = config {
            fs::write(dir.path().join("config.yaml"), config).unwrap();
        }
        let state = Arc::new(AppState {
            site: Site::new(dir.path(), mode),
            version: "1.0.0".to_owned(),
        });
        (dir, create_router(state))
    }

    async fn send(router: Router, request: Request<Body>) -> Response {
        router.oneshot(request).await.unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_root_page() {
        let (_dir, router) = router(Some(CONFIG), RenderMode::Production);
        let response = send(router, get("/")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::ETAG));
        assert_eq!(response.headers()["x-frame-options"], "DENY");
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        assert!(response.headers().contains_key("content-security-policy"));
        let html = body_text(response).await;
        assert!(html.contains("<title>Home | Acme</title>"));
        assert!(html.contains("Welcome"));
    }

    #[tokio::test]
    async fn test_nested_slug() {
        let (_dir, router) = router(Some(CONFIG), RenderMode::Production);
        let response = send(router, get("/about")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Talk to us"));
    }

    #[tokio::test]
    async fn test_matching_etag_not_modified() {
        let (_dir, router) = router(Some(CONFIG), RenderMode::Production);
        let first = send(router.clone(), get("/")).await;
        let etag = first.headers()[header::ETAG].clone();

        let request = Request::builder()
            .uri("/")
            .header(header::IF_NONE_MATCH, etag)
            .body(Body::empty())
            .unwrap();
        let response = send(router, request).await;
        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    }

    #[tokio::test]
    async fn test_unknown_slug_is_404() {
        let (_dir, router) = router(Some(CONFIG), RenderMode::Production);
        let response = send(router, get("/missing")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_missing_config_serves_fallback() {
        let (_dir, router) = router(None, RenderMode::Production);
        let response = send(router, get("/")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("http-equiv=\"refresh\""));
    }

    #[tokio::test]
    async fn test_config_check() {
        let (_dir, router) = router(Some(CONFIG), RenderMode::Production);
        let json = body_json(send(router, get("/api/config/check")).await).await;
        assert_eq!(json["exists"], true);
        assert_eq!(json["format"], "yaml");

        let (_dir, router) = self::router(None, RenderMode::Production);
        let json = body_json(send(router, get("/api/config/check")).await).await;
        assert_eq!(json, json!({"exists": false, "mtime": 0.0}));
    }

    #[tokio::test]
    async fn test_registry_is_development_only() {
        let (_dir, router) = router(Some(CONFIG), RenderMode::Production);
        let response = send(router, get("/api/registry")).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            body_json(response).await,
            json!({"error": "This endpoint is only available in development mode"})
        );

        let (_dir, router) = self::router(Some(CONFIG), RenderMode::Development);
        let response = send(router, get("/api/registry")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["total"], 13);
        assert_eq!(json["data"]["types"][0], "hero");
    }

    #[tokio::test]
    async fn test_registry_page_lookup() {
        let (_dir, router) = router(Some(CONFIG), RenderMode::Production);
        let response = send(router.clone(), get("/api/registry?slug=/about")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "success": true,
                "data": {"slug": "/about", "title": "About", "description": "Who we are"}
            })
        );

        let response = send(router, get("/api/registry?slug=/nope")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_validate() {
        let (_dir, router) = router(None, RenderMode::Development);
        let body = json!({"sections": [
            {"type": "hero", "props": {"title": "Hi"}},
            {"type": "nope", "props": {}}
        ]});
        let response = send(router, post_json("/api/validate", &body)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["validation"]["valid"], false);
        assert_eq!(json["data"]["validation"]["totalSections"], 2);
        assert_eq!(json["data"]["validation"]["invalidSections"], 1);
        assert!(
            json["data"]["healthReport"]
                .as_str()
                .unwrap()
                .starts_with("# Config Health Report")
        );
    }

    #[tokio::test]
    async fn test_validate_rejects_bad_body() {
        let (_dir, router) = router(None, RenderMode::Development);
        let response = send(
            router.clone(),
            post_json("/api/validate", &json!({"sections": "hero"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Invalid request body. Expected { sections: [...] }"})
        );

        let response = send(router, post_json("/api/validate", &json!({}))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_validate_is_development_only() {
        let (_dir, router) = router(None, RenderMode::Production);
        let response = send(router, post_json("/api/validate", &json!({"sections": []}))).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
