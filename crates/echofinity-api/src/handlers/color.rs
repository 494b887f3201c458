//! Color correction handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::{debug, info};

use echofinity_models::{corrected_output_path, ColorCorrectionRequest, ColorCorrectionResult};

use super::reject;
use crate::error::ApiResult;
use crate::metrics;
use crate::state::AppState;

/// Apply a color-correction preset to a video.
///
/// Processing is simulated: the request waits for the configured latency and
/// then reports an output path derived from the input file name.
pub async fn correct_color(
    State(state): State<AppState>,
    payload: Result<Json<ColorCorrectionRequest>, JsonRejection>,
) -> ApiResult<Json<ColorCorrectionResult>> {
    let Json(request) = payload?;
    info!(
        video_path = request.video_path.as_deref().unwrap_or_default(),
        preset = request.preset.as_deref().unwrap_or_default(),
        "Color correction request received"
    );

    let validated = request.validate().map_err(|e| reject("color", e))?;

    debug!(
        video_path = validated.video_path,
        preset = %validated.preset,
        "Applying color correction preset"
    );
    state.delay.sleep(state.config.color_latency).await;

    let corrected_path = corrected_output_path(validated.video_path, validated.preset);

    metrics::record_color_correction(validated.preset.as_str());
    info!(
        video_path = validated.video_path,
        preset = %validated.preset,
        corrected_path = %corrected_path,
        "Color correction completed"
    );

    Ok(Json(ColorCorrectionResult::success(corrected_path)))
}
