//! Router configuration for ModCheck.
//!
//! This module defines the HTTP routes and applies middleware for CORS and
//! request tracing.
//!
//! # Route Structure
//!
//! ```text
//! /api/verify     GET, POST   - Checksum verification
//! /api/isPrime    GET         - Primality diagnostic
//! /api/explain    GET         - Floor division breakdown
//! /health         GET         - Health check
//! /*              GET         - Web page (bundled or from --web-root)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use modcheck::server::routes::{create_router, RouterConfig};
//!
//! let config = RouterConfig::new()
//!     .with_cors_origins(vec!["https://example.com".to_string()]);
//!
//! let router = create_router(config);
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::path::PathBuf;
use std::time::Duration;

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::assets::StaticAssets;
use super::handlers::{
    explain_handler, health_handler, is_prime_handler, method_not_allowed_handler,
    static_handler, verify_handler, AppState,
};

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Allowed CORS origins (None = no CORS layer, `"*"` = any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Whether to enable request tracing
    pub enable_tracing: bool,

    /// Directory to serve the web page from (None = bundled page)
    pub web_root: Option<PathBuf>,
}

impl RouterConfig {
    /// Create a new router configuration.
    ///
    /// By default:
    /// - No CORS layer is installed (same-origin only)
    /// - Tracing is enabled
    /// - The bundled web page is served
    pub fn new() -> Self {
        Self {
            cors_origins: None,
            enable_tracing: true,
            web_root: None,
        }
    }

    /// Set specific allowed CORS origins.
    ///
    /// An entry of `"*"` allows any origin. An empty vec installs no CORS
    /// layer, the same as not calling this method.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }

    /// Serve static pages from a directory instead of the bundled page.
    pub fn with_web_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.web_root = Some(root.into());
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// This function builds the complete Axum router with:
/// - API routes, each answering unsupported methods with a JSON 405
/// - Health check
/// - Static page fallback for every other path
/// - CORS configuration (only when origins are configured)
/// - Request tracing (optional)
///
/// The CORS layer answers every `OPTIONS` request as a preflight, so without
/// configured origins `OPTIONS` on an API path gets the JSON 405 instead.
pub fn create_router(config: RouterConfig) -> Router {
    let assets = match &config.web_root {
        Some(root) => StaticAssets::from_dir(root),
        None => StaticAssets::bundled(),
    };
    let app_state = AppState::new(assets);

    let mut router = Router::new()
        .route(
            "/api/verify",
            api_route(get(verify_handler).post(verify_handler)),
        )
        .route("/api/isPrime", api_route(get(is_prime_handler)))
        .route("/api/explain", api_route(get(explain_handler)))
        .route("/health", get(health_handler))
        .fallback(static_handler)
        .with_state(app_state);

    if let Some(cors) = build_cors_layer(&config) {
        router = router.layer(cors);
    }

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Attach the JSON 405 handlers to an API method router.
///
/// `HEAD` is registered explicitly, otherwise axum would answer it with the
/// `GET` handler.
fn api_route(methods: MethodRouter<AppState>) -> MethodRouter<AppState> {
    methods
        .head(method_not_allowed_handler)
        .fallback(method_not_allowed_handler)
}

/// Build the CORS layer based on configuration.
///
/// Returns `None` when no origins are configured.
fn build_cors_layer(config: &RouterConfig) -> Option<CorsLayer> {
    let origins = match &config.cors_origins {
        Some(origins) if !origins.is_empty() => origins,
        _ => return None,
    };

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(86400)); // 24 hours

    if origins.iter().any(|o| o == "*") {
        return Some(cors.allow_origin(Any));
    }

    let parsed_origins: Vec<HeaderValue> =
        origins.iter().filter_map(|o| o.parse().ok()).collect();
    Some(cors.allow_origin(parsed_origins))
}

// =============================================================================
// Tests
// =============================================================================
