//! Axum API server binary.

use std::net::SocketAddr;

use anyhow::Context;
use tracing::{error, info};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use echofinity_api::{create_router, log_level_filter, metrics, ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    info!("Starting echofinity-api");

    let config = ApiConfig::from_env();
    info!(
        host = %config.host,
        port = config.port,
        color_latency_ms = config.color_latency.as_millis() as u64,
        scene_seed = ?config.scene_seed,
        "API config loaded"
    );

    let metrics_handle = if config.metrics_enabled {
        info!("Prometheus metrics enabled at /metrics");
        Some(metrics::init_metrics().context("Failed to install Prometheus recorder")?)
    } else {
        None
    };

    let state = AppState::new(config.clone());
    let app = create_router(state, metrics_handle);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Colored text output for dev, JSON when `LOG_FORMAT=json`.
///
/// `RUST_LOG` takes precedence; otherwise `LOG_LEVEL` (default `info`) is the
/// base level. The applied filter is logged once the subscriber is installed.
fn init_tracing() {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let (env_filter, directive) = resolve_filter(
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        std::env::var("LOG_LEVEL").ok(),
    );

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    info!(filter = %directive, "Logging configured");
}

/// Pick the log filter and the directive string describing it. A valid
/// `RUST_LOG` wins over `LOG_LEVEL`.
fn resolve_filter(rust_log: Option<String>, log_level: Option<String>) -> (EnvFilter, String) {
    if let Some(filter) = rust_log
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| EnvFilter::try_new(v).ok())
    {
        let directive = filter.to_string();
        return (filter, directive);
    }

    let level = log_level
        .map(|v| log_level_filter(&v))
        .unwrap_or(LevelFilter::INFO);
    (EnvFilter::default().add_directive(level.into()), level.to_string())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for CTRL+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
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

    info!("Received shutdown signal");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_directive_is_reported() {
        let (_, directive) = resolve_filter(
            Some("echofinity_api=debug".to_string()),
            Some("warning".to_string()),
        );
        assert_eq!(directive, "echofinity_api=debug");
    }

    #[test]
    fn test_log_level_used_without_rust_log() {
        let (filter, directive) = resolve_filter(None, Some("warning".to_string()));
        assert_eq!(directive, "warn");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));

        let (_, directive) = resolve_filter(None, None);
        assert_eq!(directive, "info");
    }

    #[test]
    fn test_invalid_rust_log_falls_back_to_log_level() {
        let (_, directive) = resolve_filter(
            Some("echofinity_api=loud".to_string()),
            Some("error".to_string()),
        );
        assert_eq!(directive, "error");

        let (_, directive) = resolve_filter(Some(String::new()), Some("debug".to_string()));
        assert_eq!(directive, "debug");
    }
}
