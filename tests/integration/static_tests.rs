//! Static page serving tests.
//!
//! Tests verify:
//! - The bundled page is served for non-API paths
//! - Files are served from a configured web root
//! - Fallback to index.html and the plain-text 404

use std::fs;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};

use modcheck::server::BUNDLED_INDEX_HTML;
use modcheck::{create_router, RouterConfig};

use super::test_utils::{get, request, send, TestResponse};

async fn get_from_root(root: &std::path::Path, uri: &str) -> TestResponse {
    let router = create_router(
        RouterConfig::new()
            .with_tracing(false)
            .with_web_root(root),
    );
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

// =============================================================================
// Bundled Page
// =============================================================================

#[tokio::test]
async fn test_bundled_page_at_root() {
    let response = get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.header(header::CONTENT_TYPE),
        Some("text/html; charset=utf-8")
    );
    assert_eq!(response.header(header::CACHE_CONTROL), Some("no-cache"));
    assert_eq!(response.text(), BUNDLED_INDEX_HTML);
}

#[tokio::test]
async fn test_bundled_page_for_unknown_path() {
    let response = get("/some/client/route").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), BUNDLED_INDEX_HTML);
}

#[tokio::test]
async fn test_static_rejects_post() {
    let response = request(Method::POST, "/", None, "").await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(response.body.is_empty());
}

// =============================================================================
// Web Root
// =============================================================================

#[tokio::test]
async fn test_web_root_serves_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();
    fs::write(dir.path().join("app.js"), "console.log(1);").unwrap();
    fs::create_dir(dir.path().join("css")).unwrap();
    fs::write(dir.path().join("css").join("site.css"), "body{}").unwrap();

    let response = get_from_root(dir.path(), "/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "<h1>home</h1>");

    let response = get_from_root(dir.path(), "/app.js").await;
    assert_eq!(
        response.header(header::CONTENT_TYPE),
        Some("application/javascript; charset=utf-8")
    );
    assert_eq!(response.text(), "console.log(1);");

    let response = get_from_root(dir.path(), "/css/site.css").await;
    assert_eq!(
        response.header(header::CONTENT_TYPE),
        Some("text/css; charset=utf-8")
    );
    assert_eq!(response.header(header::CACHE_CONTROL), Some("no-cache"));
}

#[tokio::test]
async fn test_web_root_falls_back_to_index() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();

    for uri in ["/missing.png", "/assets", "/../outside.txt", "/%2e%2e/outside.txt"] {
        let response = get_from_root(dir.path(), uri).await;
        assert_eq!(response.status, StatusCode::OK, "uri={uri}");
        assert_eq!(response.text(), "<h1>home</h1>", "uri={uri}");
    }
}

#[tokio::test]
async fn test_web_root_without_index_is_404() {
    let dir = tempfile::tempdir().unwrap();

    let response = get_from_root(dir.path(), "/anything").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.header(header::CONTENT_TYPE),
        Some("text/plain; charset=utf-8")
    );
    assert_eq!(response.text(), "Missing web/index.html");
}

#[tokio::test]
async fn test_web_root_does_not_shadow_api() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();

    let response = get_from_root(dir.path(), "/api/isPrime?value=7").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["isPrime"], true);
}
