//! ParkHub Server: paid parking slot allocation service
//!
//! Main entry point that loads configuration, wires the allocator into the
//! HTTP API and serves it until interrupted.

use std::future::IntoFuture;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use parkhub_core::config::AppConfig;
use parkhub_core::error::AppError;
use parkhub_service::Parking;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "parkhub-server", version, about = "Paid parking slot allocation service")]
struct Cli {
    /// Directory holding `default.toml` and per-environment overlays.
    #[arg(long, env = "PARKHUB_CONFIG_DIR", default_value = "config")]
    config_dir: String,

    /// Environment overlay to apply (`{config_dir}/{env}.toml`).
    #[arg(long, env = "PARKHUB_ENV", default_value = "development")]
    env: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.config_dir, &cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(
        config_dir = %cli.config_dir,
        env = %cli.env,
        "Configuration loaded"
    );

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ParkHub v{}", env!("CARGO_PKG_VERSION"));

    let parking = Parking::from_config(&config.parking)?;

    let bind_address = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let app = parkhub_api::build_app(parkhub_api::AppState::new(config, parking));

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {bind_address}: {e}")))?;
    tracing::info!(address = %bind_address, "Listening");

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .into_future();

    // Drain in-flight requests, but never longer than the grace period once
    // a shutdown signal has arrived.
    tokio::select! {
        result = server => {
            result?;
        }
        _ = async {
            shutdown_signal().await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!(grace_seconds = grace.as_secs(), "Shutdown grace period elapsed");
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
