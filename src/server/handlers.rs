//! HTTP request handlers for the ModCheck API.
//!
//! This module contains the Axum handlers for the verification API, the two
//! diagnostic endpoints, the health check and the static page fallback.
//!
//! # Endpoints
//!
//! - `GET|POST /api/verify` - Compare sender and receiver checksums
//! - `GET /api/isPrime` - Primality diagnostic
//! - `GET /api/explain` - Floor quotient/remainder breakdown
//! - `GET /health` - Health check endpoint
//! - `GET /*` - Bundled web page
//!
//! Every `/api/*` response, success or failure, is JSON with
//! `Cache-Control: no-store`.

use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::checksum::{self, Explanation, VerificationOutcome};
use crate::error::ApiError;

use super::assets::{StaticAssets, MISSING_INDEX_MESSAGE};
use super::params::{ParamSource, MODULUS, RECEIVED_DATA, SENT_DATA};

/// Content type of every API response.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Cache policy of every API response.
pub const API_CACHE_CONTROL: &str = "no-store";

/// Cache policy of static page responses.
pub const STATIC_CACHE_CONTROL: &str = "no-cache";

// =============================================================================
// Application State
// =============================================================================

/// Shared application state.
///
/// Configuration only; nothing here is mutated after startup.
#[derive(Clone, Default)]
pub struct AppState {
    /// Static page content served for non-API paths
    pub assets: Arc<StaticAssets>,
}

impl AppState {
    /// Create application state serving the given assets.
    pub fn new(assets: StaticAssets) -> Self {
        Self {
            assets: Arc::new(assets),
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// Successful `/api/verify` body.
///
/// Field order is part of the wire format.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    /// True iff the checksums matched
    pub ok: bool,

    /// Data as sent
    pub sent_data: i64,

    /// The modulus, under its historical wire name
    pub prime: i64,

    /// Data as received
    pub received_data: i64,

    /// Checksum computed from the sent data
    pub sender_checksum: i64,

    /// Checksum computed from the received data
    pub receiver_checksum: i64,

    /// Verdict shown to the user
    pub message: &'static str,
}

impl From<VerificationOutcome> for VerifyResponse {
    fn from(outcome: VerificationOutcome) -> Self {
        Self {
            ok: outcome.matched(),
            sent_data: outcome.sent_data(),
            prime: outcome.modulus(),
            received_data: outcome.received_data(),
            sender_checksum: outcome.sender_checksum(),
            receiver_checksum: outcome.receiver_checksum(),
            message: outcome.message(),
        }
    }
}

/// Successful `/api/isPrime` body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IsPrimeResponse {
    /// Always true
    pub ok: bool,

    /// The value tested
    pub value: i64,

    /// Whether the value is prime
    pub is_prime: bool,
}

/// Successful `/api/explain` body.
#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    /// Always true
    pub ok: bool,

    /// The dividend
    pub data: i64,

    /// The modulus as given, sign included
    pub prime: i64,

    /// Floor of `data / |prime|`
    pub quotient: i64,

    /// Remainder in `[0, |prime|)`
    pub remainder: i64,
}

impl From<Explanation> for ExplainResponse {
    fn from(explanation: Explanation) -> Self {
        Self {
            ok: true,
            data: explanation.data,
            prime: explanation.modulus,
            quotient: explanation.quotient,
            remainder: explanation.remainder,
        }
    }
}

/// JSON error body returned for all API error conditions.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always false
    pub ok: bool,

    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

/// JSON body with the API's fixed content type and cache headers.
#[derive(Debug)]
pub struct ApiJson<T>(pub StatusCode, pub T);

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        let (status, body) = match serde_json::to_vec(&self.1) {
            Ok(body) => (self.0, body),
            Err(e) => {
                error!("Failed to serialize response: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    br#"{"ok":false,"message":"Internal error"}"#.to_vec(),
                )
            }
        };

        (
            status,
            [
                (header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE)),
                (
                    header::CACHE_CONTROL,
                    HeaderValue::from_static(API_CACHE_CONTROL),
                ),
            ],
            body,
        )
            .into_response()
    }
}

// =============================================================================
// Error Mapping
// =============================================================================

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameters(_) | ApiError::InvalidModulus => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert ApiError to HTTP response.
///
/// - 4xx errors are logged at WARN level (client errors)
/// - 5xx errors are logged at ERROR level (server errors)
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            // Details stay in the log, not the response
            ApiError::Internal(detail) => {
                error!(status = status.as_u16(), "Server error: {}", detail);
                "Internal error".to_string()
            }
            _ => {
                warn!(status = status.as_u16(), "Client error: {}", self);
                self.to_string()
            }
        };

        ApiJson(status, ErrorResponse::new(message)).into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle verification requests.
///
/// # Endpoint
///
/// `GET /api/verify?sentData=..&prime=..&receivedData=..`
///
/// `POST /api/verify` with either a URL-encoded form body or, when
/// `Content-Type` is `application/json`, a JSON object body.
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "ok": false,
///   "sentData": 10,
///   "prime": 3,
///   "receivedData": 11,
///   "senderChecksum": 1,
///   "receiverChecksum": 2,
///   "message": "Error Detected - Data Corrupted"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Missing or unparsable parameters, or zero modulus
pub async fn verify_handler(
    method: Method,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<ApiJson<VerifyResponse>, ApiError> {
    let params = ParamSource::from_request(&method, &headers, query.as_deref(), &body);

    let (Some(sent_data), Some(modulus), Some(received_data)) = (
        params.lookup(SENT_DATA),
        params.lookup(MODULUS),
        params.lookup(RECEIVED_DATA),
    ) else {
        return Err(ApiError::MissingParameters("sentData, prime, receivedData"));
    };

    let outcome = checksum::verify(sent_data, modulus, received_data)?;

    debug!(
        sent_data,
        modulus,
        received_data,
        matched = outcome.matched(),
        "Verified transmission"
    );

    Ok(ApiJson(StatusCode::OK, outcome.into()))
}

/// Handle primality requests.
///
/// # Endpoint
///
/// `GET /api/isPrime?value=..`
///
/// # Response
///
/// `200 OK` with JSON body `{"ok":true,"value":17,"isPrime":true}`.
///
/// # Errors
///
/// - `400 Bad Request`: Missing or unparsable `value`
pub async fn is_prime_handler(
    RawQuery(query): RawQuery,
) -> Result<ApiJson<IsPrimeResponse>, ApiError> {
    let params = ParamSource::from_query(query.as_deref());

    let value = params
        .lookup("value")
        .ok_or(ApiError::MissingParameters("value"))?;

    // Trial division over large i64 primes runs long enough to stall a worker
    let is_prime = tokio::task::spawn_blocking(move || checksum::is_prime(value))
        .await
        .map_err(|e| ApiError::Internal(format!("primality task failed: {}", e)))?;

    Ok(ApiJson(
        StatusCode::OK,
        IsPrimeResponse {
            ok: true,
            value,
            is_prime,
        },
    ))
}

/// Handle floor-division breakdown requests.
///
/// # Endpoint
///
/// `GET /api/explain?data=..&prime=..`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// { "ok": true, "data": -7, "prime": 3, "quotient": -3, "remainder": 2 }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Missing parameters or zero modulus
pub async fn explain_handler(
    RawQuery(query): RawQuery,
) -> Result<ApiJson<ExplainResponse>, ApiError> {
    let params = ParamSource::from_query(query.as_deref());

    let (Some(data), Some(modulus)) = (params.lookup("data"), params.lookup(MODULUS)) else {
        return Err(ApiError::MissingParameters("data, prime"));
    };

    let explanation = checksum::explain(data, modulus)?;

    Ok(ApiJson(StatusCode::OK, explanation.into()))
}

/// Fallback for API paths called with an unsupported method.
pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Serve the web page for any path not claimed by the API.
///
/// Only `GET` and `HEAD` are accepted; other methods get an empty `405`.
/// When no page can be found the response is a plain-text `404`.
pub async fn static_handler(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    match state.assets.load(uri.path()).await {
        Some(asset) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, HeaderValue::from_static(asset.content_type)),
                (
                    header::CACHE_CONTROL,
                    HeaderValue::from_static(STATIC_CACHE_CONTROL),
                ),
            ],
            asset.body,
        )
            .into_response(),
        None => {
            debug!(path = uri.path(), "Static page not found");
            (
                StatusCode::NOT_FOUND,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("text/plain; charset=utf-8"),
                )],
                MISSING_INDEX_MESSAGE,
            )
                .into_response()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
