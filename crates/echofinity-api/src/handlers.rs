//! Request handlers.

pub mod color;
pub mod health;
pub mod scene;
pub mod subtitle;

pub use color::*;
pub use health::*;
pub use scene::*;
pub use subtitle::*;

use echofinity_models::ValidationError;
use tracing::warn;

use crate::error::ApiError;
use crate::metrics;

/// Log and count a validation failure, then turn it into a 400.
fn reject(endpoint: &'static str, err: ValidationError) -> ApiError {
    warn!(
        endpoint,
        field = err.field(),
        reason = %err,
        "Request rejected"
    );
    metrics::record_validation_rejection(endpoint, err.kind().as_str());
    ApiError::from(err)
}
