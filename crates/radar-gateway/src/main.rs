//! Release Radar gateway binary.
//!
//! Loads config from defaults, an optional YAML file, and `RELEASE_RADAR_*`
//! overrides, then serves the HTTP API until Ctrl+C / SIGTERM.

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use radar_core::error::{RadarError, Result};
use radar_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "release-radar-gateway failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_from_env()?;
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .map_err(|e| RadarError::BadRequest(format!("server.listen must be a valid SocketAddr: {e}")))?;

    let t = cfg.thresholds;
    tracing::info!(
        app = %cfg.app.name,
        version = %cfg.app.version,
        storage = cfg.storage.kind.as_str(),
        "release-radar-gateway starting"
    );
    tracing::info!(
        error_rate_pct = t.error_rate_threshold * 100.0,
        latency_p95_ms = t.latency_p95_threshold,
        throughput_min = t.throughput_min,
        errors_5xx_max = t.errors_5xx_max(),
        "risk thresholds"
    );

    let app_name = cfg.app.name.clone();
    let state = AppState::new(cfg)?;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| RadarError::Internal(format!("failed to bind {listen}: {e}")))?;
    tracing::info!(%listen, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| RadarError::Internal(format!("server failed: {e}")))?;

    tracing::info!(app = %app_name, "shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("signal received, starting graceful shutdown");
}
