//! API configuration.

use std::time::Duration;

use echofinity_models::SceneSeed;
use tracing::level_filters::LevelFilter;

/// Default simulated latency of the color-correction endpoint.
pub const DEFAULT_COLOR_LATENCY: Duration = Duration::from_secs(2);

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Max request body size
    pub max_body_size: usize,
    /// Simulated processing time for color correction
    pub color_latency: Duration,
    /// Randomness source for scene detection
    pub scene_seed: SceneSeed,
    /// Expose Prometheus metrics at /metrics
    pub metrics_enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
            cors_origins: vec!["*".to_string()],
            max_body_size: 1024 * 1024, // 1MB
            color_latency: DEFAULT_COLOR_LATENCY,
            scene_seed: SceneSeed::Entropy,
            metrics_enabled: false,
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup. Unset or unparsable
    /// values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: lookup("API_HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.cors_origins),
            max_body_size: lookup("MAX_BODY_SIZE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_size),
            color_latency: lookup("COLOR_LATENCY_MS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.color_latency),
            scene_seed: lookup("SCENE_SEED")
                .and_then(|s| s.parse().ok())
                .map(SceneSeed::Fixed)
                .unwrap_or(defaults.scene_seed),
            metrics_enabled: lookup("METRICS_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.metrics_enabled),
        }
    }
}

/// Map a `LOG_LEVEL` value to a level filter.
///
/// Accepts tracing level names plus the Python-style `warning`, `critical`
/// and `fatal`. Anything unrecognized falls back to `info`.
pub fn log_level_filter(raw: &str) -> LevelFilter {
    match raw.trim().to_lowercase().as_str() {
        "warning" => LevelFilter::WARN,
        "critical" | "fatal" => LevelFilter::ERROR,
        other => other.parse().unwrap_or(LevelFilter::INFO),
    }
}
