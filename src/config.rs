//! Configuration management for ModCheck.
//!
//! This module provides a flexible configuration system that supports:
//! - Command-line arguments via clap
//! - Environment variables with `MODCHECK_` prefix
//! - Sensible defaults for all optional settings
//!
//! # Commands
//!
//! - `modcheck` / `modcheck serve` - Run the HTTP API and web page
//! - `modcheck console` - Interactive prompt on stdin/stdout
//!
//! # Environment Variables
//!
//! - `MODCHECK_HOST` - Server bind address (default: 127.0.0.1)
//! - `MODCHECK_PORT` - Server port (default: 8080)
//! - `MODCHECK_WEB_ROOT` - Directory to serve the web page from
//! - `MODCHECK_CORS_ORIGINS` - Allowed CORS origins, comma-separated

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port.
pub const DEFAULT_PORT: u16 = 8080;

// =============================================================================
// CLI Arguments
// =============================================================================

/// ModCheck - modular-arithmetic checksum verifier.
///
/// Simulates a sender computing `data mod modulus`, a channel that may
/// corrupt the data, and a receiver recomputing the checksum to detect it.
/// Runs the HTTP server when no subcommand is given.
#[derive(Parser, Debug, Clone)]
#[command(name = "modcheck")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub serve: ServeConfig,
}

impl Cli {
    /// Resolve the command to run, defaulting to `serve`.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Serve(self.serve))
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP API and web page
    Serve(ServeConfig),

    /// Run one interactive verification on the terminal
    Console,
}

/// Options for the HTTP server.
#[derive(Args, Debug, Clone)]
pub struct ServeConfig {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "MODCHECK_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "MODCHECK_PORT")]
    pub port: u16,

    /// Directory to serve the web page from.
    ///
    /// If not specified, the page bundled into the binary is served.
    #[arg(long, env = "MODCHECK_WEB_ROOT")]
    pub web_root: Option<PathBuf>,

    // =========================================================================
    // CORS Configuration
    // =========================================================================
    /// Allowed CORS origins (comma-separated, `*` for any origin).
    ///
    /// If not specified, no CORS headers are sent.
    #[arg(long, env = "MODCHECK_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl ServeConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("port must be between 1 and 65535".to_string());
        }

        if self.host.trim().is_empty() {
            return Err("host must not be empty. Set --host or MODCHECK_HOST".to_string());
        }

        if let Some(ref root) = self.web_root {
            if !root.is_dir() {
                return Err(format!(
                    "web root '{}' is not a directory",
                    root.display()
                ));
            }
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Tests
// =============================================================================
