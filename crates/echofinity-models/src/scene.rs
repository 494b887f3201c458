//! Mock scene-boundary detection.
//!
//! Scenes tile a fixed 90 second timeline. Cut points are sampled as distinct
//! tenths of a second, so every scene lasts at least 0.1s and consecutive
//! scenes share their boundary value exactly.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::SUCCESS_STATUS;

/// End of the mocked timeline, in seconds.
pub const SCENE_TIMELINE_END: f64 = 90.0;

/// Fewest scenes a detection run produces.
pub const MIN_SCENES: usize = 3;

/// Most scenes a detection run produces.
pub const MAX_SCENES: usize = 5;

/// Cut points are drawn from [5.0, 85.0], expressed in tenths of a second.
const CUT_WINDOW_START_TENTHS: usize = 50;
const CUT_WINDOW_END_TENTHS: usize = 850;

/// A detected shot, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Scene {
    pub start: f64,
    pub end: f64,
}

impl Scene {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Scene-detection response body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SceneResponse {
    pub status: String,
    pub scenes: Vec<Scene>,
}

impl SceneResponse {
    pub fn success(scenes: Vec<Scene>) -> Self {
        Self {
            status: SUCCESS_STATUS.to_string(),
            scenes,
        }
    }
}

/// Where scene generation gets its randomness from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneSeed {
    /// Fresh OS entropy for every request
    #[default]
    Entropy,
    /// Same seed for every request, so every run yields the same scenes
    Fixed(u64),
}

impl SceneSeed {
    /// Build a new generator for a single request.
    pub fn rng(&self) -> StdRng {
        match self {
            SceneSeed::Entropy => StdRng::from_os_rng(),
            SceneSeed::Fixed(seed) => StdRng::seed_from_u64(*seed),
        }
    }
}

/// Generate between [`MIN_SCENES`] and [`MAX_SCENES`] contiguous scenes
/// covering `[0.0, SCENE_TIMELINE_END]`.
pub fn generate_scenes<R: Rng + ?Sized>(rng: &mut R) -> Vec<Scene> {
    let count = rng.random_range(MIN_SCENES..=MAX_SCENES);
    let window = CUT_WINDOW_END_TENTHS - CUT_WINDOW_START_TENTHS + 1;

    let mut cuts: Vec<usize> = index::sample(rng, window, count - 1)
        .into_iter()
        .map(|offset| CUT_WINDOW_START_TENTHS + offset)
        .collect();
    cuts.sort_unstable();

    let mut scenes = Vec::with_capacity(count);
    let mut start = 0.0;
    for tenths in cuts {
        let end = tenths as f64 / 10.0;
        scenes.push(Scene { start, end });
        start = end;
    }
    scenes.push(Scene {
        start,
        end: SCENE_TIMELINE_END,
    });

    scenes
}
