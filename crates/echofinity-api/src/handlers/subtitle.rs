//! Subtitle generation handler.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use tracing::{debug, info};

use echofinity_models::{mock_subtitles, AnalysisRequest, SubtitleResponse};

use super::reject;
use crate::error::ApiResult;

/// Generate subtitles for a video. Always returns the same three cues.
pub async fn generate_subtitles(
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> ApiResult<Json<SubtitleResponse>> {
    let Json(request) = payload?;
    info!(
        video_path = request.video_path.as_deref().unwrap_or_default(),
        "Subtitle generation request received"
    );

    let validated = request.validate().map_err(|e| reject("subtitle", e))?;

    debug!(video_path = validated.video_path, "Processing subtitle generation");
    let subtitles = mock_subtitles();

    info!(
        video_path = validated.video_path,
        subtitle_count = subtitles.len(),
        "Subtitle generation completed"
    );

    Ok(Json(SubtitleResponse::success(subtitles)))
}
