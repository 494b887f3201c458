//! Inbound request bodies.
//!
//! Fields are optional at the serde level so that an absent field surfaces
//! as a [`ValidationError`] with the same message as an empty one, instead of
//! a body parse failure.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::preset::ColorPreset;
use crate::validation::{validate_preset, validate_video_path, ValidationError};

/// Body of the scene-detection and subtitle-generation endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Absolute or relative path to the video file
    #[serde(default)]
    pub video_path: Option<String>,
}

/// An [`AnalysisRequest`] that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedAnalysis<'a> {
    pub video_path: &'a str,
}

impl AnalysisRequest {
    pub fn new(video_path: impl Into<String>) -> Self {
        Self {
            video_path: Some(video_path.into()),
        }
    }

    /// Validate the request.
    pub fn validate(&self) -> Result<ValidatedAnalysis<'_>, ValidationError> {
        let video_path = validate_video_path(self.video_path.as_deref())?;
        Ok(ValidatedAnalysis { video_path })
    }
}

/// Body of the color-correction endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorCorrectionRequest {
    /// Absolute or relative path to the video file
    #[serde(default)]
    pub video_path: Option<String>,
    /// Color correction preset: cinematic, warm, cool, or vintage
    #[serde(default)]
    pub preset: Option<String>,
}

/// A [`ColorCorrectionRequest`] that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedColorCorrection<'a> {
    pub video_path: &'a str,
    pub preset: ColorPreset,
}

impl ColorCorrectionRequest {
    pub fn new(video_path: impl Into<String>, preset: impl Into<String>) -> Self {
        Self {
            video_path: Some(video_path.into()),
            preset: Some(preset.into()),
        }
    }

    /// Validate the request. The video path is checked before the preset.
    pub fn validate(&self) -> Result<ValidatedColorCorrection<'_>, ValidationError> {
        let video_path = validate_video_path(self.video_path.as_deref())?;
        let preset = validate_preset(self.preset.as_deref().unwrap_or_default())?;
        Ok(ValidatedColorCorrection { video_path, preset })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_deserialize_camel_case() {
        let request: ColorCorrectionRequest =
            serde_json::from_str(r#"{"videoPath": "clips/raw/intro.mp4", "preset": "Warm"}"#)
                .unwrap();
        assert_eq!(request.video_path.as_deref(), Some("clips/raw/intro.mp4"));
        assert_eq!(request.preset.as_deref(), Some("Warm"));
    }

    #[test]
    fn test_absent_fields_deserialize_as_none() {
        let request: ColorCorrectionRequest = serde_json::from_str("{}").unwrap();
        assert!(request.video_path.is_none());
        assert!(request.preset.is_none());

        let request: AnalysisRequest = serde_json::from_str(r#"{"videoPath": null}"#).unwrap();
        assert!(request.video_path.is_none());
    }

    #[test]
    fn test_analysis_validate() {
        let request = AnalysisRequest::new("clips/raw/intro.mp4");
        assert_eq!(request.validate().unwrap().video_path, "clips/raw/intro.mp4");

        let err = AnalysisRequest::default().validate().unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::MissingField);
    }

    #[test]
    fn test_color_validate_checks_path_first() {
        let err = ColorCorrectionRequest::new(" ", "sepia").validate().unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::MissingField);

        let err = ColorCorrectionRequest::new("a.mp4", "sepia").validate().unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidEnum);
    }

    #[test]
    fn test_color_validate_absent_preset_is_invalid_enum() {
        let request = ColorCorrectionRequest {
            video_path: Some("a.mp4".to_string()),
            preset: None,
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidEnum);
    }

    #[test]
    fn test_color_validate_normalizes_preset() {
        let request = ColorCorrectionRequest::new("clips/raw/intro.mp4", "CINEMATIC");
        let validated = request.validate().unwrap();
        assert_eq!(validated.preset, ColorPreset::Cinematic);
        assert_eq!(validated.video_path, "clips/raw/intro.mp4");
    }
}
