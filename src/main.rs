//! ModCheck - modular-arithmetic checksum verifier.
//!
//! This binary starts the HTTP server or the interactive console.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use modcheck::{
    config::{Cli, Command, ServeConfig},
    console::run_console,
    server::{create_router, RouterConfig},
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.into_command() {
        Command::Serve(config) => run_serve(config).await,
        Command::Console => run_console_session(),
    }
}

// =============================================================================
// Serve Command
// =============================================================================

async fn run_serve(config: ServeConfig) -> ExitCode {
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("ModCheck v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration:");
    match config.web_root {
        Some(ref root) => info!("  Web root: {}", root.display()),
        None => info!("  Web root: bundled page"),
    }
    match config.cors_origins {
        Some(ref origins) if origins.iter().any(|o| o == "*") => {
            warn!("  CORS: any origin")
        }
        Some(ref origins) if !origins.is_empty() => {
            info!("  CORS origins: {}", origins.join(", "))
        }
        _ => info!("  CORS: disabled"),
    }

    let router = create_router(build_router_config(&config));

    let addr = config.bind_address();

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    info!("");
    info!("────────────────────────────────────────────────────────────────");
    info!("  Web UI running at: http://{}/", addr);
    info!("");
    info!("  Try these endpoints:");
    info!(
        "    curl 'http://{}/api/verify?sentData=10&prime=3&receivedData=11'",
        addr
    );
    info!("    curl 'http://{}/api/explain?data=-7&prime=3'", addr);
    info!("    curl 'http://{}/api/isPrime?value=17'", addr);
    info!("────────────────────────────────────────────────────────────────");
    info!("");

    if let Err(e) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Server stopped");
    ExitCode::SUCCESS
}

/// Resolve when the process receives Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        // Never resolve: keep serving rather than exiting immediately
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "modcheck=debug,tower_http=debug"
    } else {
        "modcheck=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build RouterConfig from the application ServeConfig.
fn build_router_config(config: &ServeConfig) -> RouterConfig {
    let mut router_config = RouterConfig::new().with_tracing(!config.no_tracing);

    if let Some(ref origins) = config.cors_origins {
        router_config = router_config.with_cors_origins(origins.clone());
    }

    if let Some(ref root) = config.web_root {
        router_config = router_config.with_web_root(root.clone());
    }

    router_config
}

// =============================================================================
// Console Command
// =============================================================================

fn run_console_session() -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();

    match run_console(&mut stdin.lock(), &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
