//! Scene detection handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::{debug, info};

use echofinity_models::{generate_scenes, AnalysisRequest, SceneResponse};

use super::reject;
use crate::error::ApiResult;
use crate::metrics;
use crate::state::AppState;

/// Detect scene boundaries in a video.
///
/// Boundaries are mocked: 3 to 5 random, contiguous scenes over a 90 second
/// timeline.
pub async fn detect_scenes(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> ApiResult<Json<SceneResponse>> {
    let Json(request) = payload?;
    info!(
        video_path = request.video_path.as_deref().unwrap_or_default(),
        "Scene detection request received"
    );

    let validated = request.validate().map_err(|e| reject("scene", e))?;

    debug!(video_path = validated.video_path, "Processing scene detection");
    let scenes = generate_scenes(&mut state.config.scene_seed.rng());

    metrics::record_scenes_generated(scenes.len());
    info!(
        video_path = validated.video_path,
        scene_count = scenes.len(),
        "Scene detection completed"
    );

    Ok(Json(SceneResponse::success(scenes)))
}
