//! Axum HTTP API server for the EchoFinity AI service.
//!
//! This crate provides:
//! - Mocked scene detection, subtitle generation, and color correction endpoints
//! - FastAPI-compatible `{"detail": ...}` error bodies
//! - Request IDs, request logging, and CORS
//! - Prometheus metrics

pub mod config;
pub mod delay;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::{log_level_filter, ApiConfig};
pub use delay::{Delay, NoDelay, TokioDelay};
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
