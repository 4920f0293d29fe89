//! HTTP server layer for ModCheck.
//!
//! This module exposes the checksum engine over a small JSON API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │              GET|POST /api/verify?sentData&prime&...            │
//! │                                                                 │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐  ┌────────┐  │
//! │  │   params    │  │  handlers   │  │   assets    │  │ routes │  │
//! │  │ (query/form │  │ (validate,  │  │ (web page)  │  │        │  │
//! │  │  /json)     │  │  respond)   │  │             │  │        │  │
//! │  └─────────────┘  └─────────────┘  └─────────────┘  └────────┘  │
//! └────────────────────────────┬────────────────────────────────────┘
//!                              ▼
//!                       Checksum Engine
//! ```

pub mod assets;
pub mod handlers;
pub mod params;
pub mod routes;

pub use assets::{Asset, StaticAssets, BUNDLED_INDEX_HTML, MISSING_INDEX_MESSAGE};
pub use handlers::{
    explain_handler, health_handler, is_prime_handler, method_not_allowed_handler,
    static_handler, verify_handler, ApiJson, AppState, ErrorResponse, ExplainResponse,
    HealthResponse, IsPrimeResponse, VerifyResponse, JSON_CONTENT_TYPE,
};
pub use params::{JsonParams, ParamSource};
pub use routes::{create_router, RouterConfig};
