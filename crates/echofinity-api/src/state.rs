//! Application state.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::delay::{Delay, TokioDelay};

/// Shared application state. Read-only after construction.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub delay: Arc<dyn Delay>,
}

impl AppState {
    /// Create application state that sleeps on the Tokio timer.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_delay(config, Arc::new(TokioDelay))
    }

    /// Create application state with a custom delay implementation.
    pub fn with_delay(config: ApiConfig, delay: Arc<dyn Delay>) -> Self {
        Self { config, delay }
    }
}
