//! # ModCheck
//!
//! A simulator for modular-arithmetic checksum error detection.
//!
//! A sender computes `checksum = data mod |modulus|` and transmits the data.
//! The channel may corrupt it. The receiver recomputes the checksum from what
//! arrived and compares the two. Equal checksums mean "no error detected",
//! which is not the same as "no error": changes by a multiple of the modulus
//! slip through.
//!
//! ## Features
//!
//! - **Checksum engine**: floor-remainder checksums that never panic, for any `i64`
//! - **JSON API**: `/api/verify` accepting query, form or JSON input
//! - **Diagnostics**: `/api/isPrime` and `/api/explain`
//! - **Web page**: bundled single-page UI, or files from a directory
//! - **Console mode**: the same exchange as terminal prompts
//!
//! ## Architecture
//!
//! - [`checksum`] - Pure checksum, verification and floor division functions
//! - [`server`] - Axum-based HTTP server and routes
//! - [`console`] - Interactive terminal front end
//! - [`config`] - CLI and configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use modcheck::{create_router, RouterConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let router = create_router(RouterConfig::new());
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod checksum;
pub mod config;
pub mod console;
pub mod error;
pub mod server;

// Re-export commonly used types
pub use checksum::{
    explain, generate_checksum, is_prime, verify, Explanation, VerificationOutcome,
    ERROR_DETECTED_MESSAGE, NO_ERROR_MESSAGE,
};
pub use config::{Cli, Command, ServeConfig};
pub use console::run_console;
pub use error::{ApiError, ChecksumError, ConsoleError};
pub use server::{
    create_router, health_handler, verify_handler, AppState, ErrorResponse, ParamSource,
    RouterConfig, StaticAssets, VerifyResponse,
};
