//! Tests for the primality, explain and health endpoints.

use axum::http::{Method, StatusCode};

use super::test_utils::{assert_api_headers, get, request};

const METHOD_NOT_ALLOWED: &str = r#"{"ok":false,"message":"Method not allowed"}"#;

// =============================================================================
// /api/isPrime
// =============================================================================

#[tokio::test]
async fn test_is_prime_true() {
    let response = get("/api/isPrime?value=17").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_api_headers(&response);
    assert_eq!(response.text(), r#"{"ok":true,"value":17,"isPrime":true}"#);
}

#[tokio::test]
async fn test_is_prime_false() {
    for (value, expected) in [(1, false), (0, false), (-17, false), (2, true), (91, false)] {
        let response = get(&format!("/api/isPrime?value={value}")).await;
        let json = response.json();

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(json["value"], value);
        assert_eq!(json["isPrime"], expected, "value={value}");
    }
}

#[tokio::test]
async fn test_is_prime_missing_value() {
    for uri in ["/api/isPrime", "/api/isPrime?value=", "/api/isPrime?value=abc"] {
        let response = get(uri).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "uri={uri}");
        assert_api_headers(&response);
        assert_eq!(
            response.text(),
            r#"{"ok":false,"message":"Missing parameter: value"}"#
        );
    }
}

#[tokio::test]
async fn test_is_prime_rejects_other_methods() {
    for method in [Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS] {
        let response = request(method.clone(), "/api/isPrime", None, "value=17").await;

        assert_eq!(
            response.status,
            StatusCode::METHOD_NOT_ALLOWED,
            "method={method}"
        );
        assert_api_headers(&response);
        assert_eq!(response.text(), METHOD_NOT_ALLOWED);
    }
}

#[tokio::test]
async fn test_is_prime_rejects_head() {
    let response = request(Method::HEAD, "/api/isPrime?value=7", None, "").await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_api_headers(&response);
    assert!(response.body.is_empty());
}

// =============================================================================
// /api/explain
// =============================================================================

#[tokio::test]
async fn test_explain_negative_data() {
    let response = get("/api/explain?data=-7&prime=3").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_api_headers(&response);
    assert_eq!(
        response.text(),
        r#"{"ok":true,"data":-7,"prime":3,"quotient":-3,"remainder":2}"#
    );
}

#[tokio::test]
async fn test_explain_negative_modulus_uses_absolute_value() {
    let response = get("/api/explain?data=17&prime=-5").await;
    let json = response.json();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(json["prime"], -5);
    assert_eq!(json["quotient"], 3);
    assert_eq!(json["remainder"], 2);
}

#[tokio::test]
async fn test_explain_missing_params() {
    let response = get("/api/explain?data=7").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.text(),
        r#"{"ok":false,"message":"Missing parameters: data, prime"}"#
    );
}

#[tokio::test]
async fn test_explain_zero_modulus() {
    let response = get("/api/explain?data=7&prime=0").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_api_headers(&response);
    assert_eq!(
        response.text(),
        r#"{"ok":false,"message":"Key/modulus must be non-zero"}"#
    );
}

#[tokio::test]
async fn test_explain_rejects_other_methods() {
    for method in [Method::POST, Method::PATCH, Method::OPTIONS] {
        let response = request(method.clone(), "/api/explain", None, "data=7&prime=3").await;

        assert_eq!(
            response.status,
            StatusCode::METHOD_NOT_ALLOWED,
            "method={method}"
        );
        assert_api_headers(&response);
        assert_eq!(response.text(), METHOD_NOT_ALLOWED);
    }
}

#[tokio::test]
async fn test_explain_rejects_head() {
    let response = request(Method::HEAD, "/api/explain?data=1&prime=3", None, "").await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_api_headers(&response);
    assert!(response.body.is_empty());
}

// =============================================================================
// /health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let response = get("/health").await;
    let json = response.json();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
