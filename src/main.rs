//! Bounded LRU - An in-memory key-value cache
//!
//! Runs either the stdin command loop or the HTTP server, depending on
//! `RUN_MODE`.

use std::io;
use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bounded_lru::api::create_router;
use bounded_lru::{run_stream, AppState, Config, RunMode};

/// Main entry point.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber, logging to stderr
/// 2. Load configuration from environment variables
/// 3. Run the selected front-end until input ends or a shutdown signal arrives
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Stdout carries protocol output, so logs go to stderr.
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bounded_lru=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: mode={:?}, initial_capacity={}, port={}",
        config.mode, config.initial_capacity, config.server_port
    );

    match config.mode {
        RunMode::Stdin => run_stdin().await,
        RunMode::Http => run_http(&config).await,
    }
}

/// Processes a command stream from stdin on a blocking thread.
async fn run_stdin() -> anyhow::Result<()> {
    let summary = tokio::task::spawn_blocking(|| {
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_stream(stdin.lock(), io::BufWriter::new(stdout.lock()))
    })
    .await
    .context("command loop panicked")?
    .context("failed to process command stream")?;

    info!(
        "Command stream done: executed={}, rejected={}",
        summary.executed, summary.rejected
    );
    Ok(())
}

/// Serves the HTTP API until Ctrl+C or SIGTERM.
async fn run_http(config: &Config) -> anyhow::Result<()> {
    let state = AppState::from_config(config);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
