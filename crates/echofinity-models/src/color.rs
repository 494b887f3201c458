//! Mock color correction.
//!
//! Nothing is rendered; the output location is derived from the input file
//! name and the preset.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::preset::ColorPreset;
use crate::SUCCESS_STATUS;

/// Directory every corrected output is reported under.
pub const PROCESSED_OUTPUT_DIR: &str = "outputs/processed";

const PATH_SEPARATORS: &[char] = &['/', '\\'];

/// Color-correction response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorCorrectionResult {
    pub status: String,
    pub corrected_path: String,
}

impl ColorCorrectionResult {
    pub fn success(corrected_path: String) -> Self {
        Self {
            status: SUCCESS_STATUS.to_string(),
            corrected_path,
        }
    }
}

/// Build `outputs/processed/{stem}_mock_{preset}_corrected{ext}` from the
/// last segment of `video_path`.
pub fn corrected_output_path(video_path: &str, preset: ColorPreset) -> String {
    let (stem, extension) = split_extension(file_name(video_path));
    format!(
        "{}/{}_mock_{}_corrected{}",
        PROCESSED_OUTPUT_DIR, stem, preset, extension
    )
}

/// Final path segment, ignoring trailing separators.
fn file_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(PATH_SEPARATORS);
    trimmed.rsplit(PATH_SEPARATORS).next().unwrap_or(trimmed)
}

/// Split at the last dot. Leading and trailing dots belong to the stem.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => name.split_at(idx),
        _ => (name, ""),
    }
}
