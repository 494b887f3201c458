//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "echofinity_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "echofinity_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "echofinity_http_requests_in_flight";

    // Analysis metrics
    pub const VALIDATION_REJECTIONS_TOTAL: &str = "echofinity_validation_rejections_total";
    pub const SCENES_GENERATED: &str = "echofinity_scenes_generated";
    pub const COLOR_CORRECTIONS_TOTAL: &str = "echofinity_color_corrections_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a request rejected by validation.
pub fn record_validation_rejection(endpoint: &str, kind: &str) {
    let labels = [
        ("endpoint", endpoint.to_string()),
        ("kind", kind.to_string()),
    ];
    counter!(names::VALIDATION_REJECTIONS_TOTAL, &labels).increment(1);
}

/// Record how many scenes a detection run produced.
pub fn record_scenes_generated(count: usize) {
    histogram!(names::SCENES_GENERATED).record(count as f64);
}

/// Record a completed color correction.
pub fn record_color_correction(preset: &str) {
    let labels = [("preset", preset.to_string())];
    counter!(names::COLOR_CORRECTIONS_TOTAL, &labels).increment(1);
}

/// Metrics middleware for HTTP requests. Labels use the route template.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);

    let response = next.run(request).await;

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, &path, status, duration);

    response
}
