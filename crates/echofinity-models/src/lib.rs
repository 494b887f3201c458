//! Shared data models for the EchoFinity AI service.
//!
//! This crate provides Serde-serializable types for:
//! - Analysis and color-correction request bodies, with validation
//! - Color-correction presets
//! - Mock scene, subtitle, and color-correction generators

pub mod color;
pub mod preset;
pub mod request;
pub mod scene;
pub mod subtitle;
pub mod validation;

/// `status` value of every successful response.
pub const SUCCESS_STATUS: &str = "success";

// Re-export common types
pub use color::{corrected_output_path, ColorCorrectionResult};
pub use preset::{ColorPreset, PresetParseError};
pub use request::{
    AnalysisRequest, ColorCorrectionRequest, ValidatedAnalysis, ValidatedColorCorrection,
};
pub use scene::{generate_scenes, Scene, SceneResponse, SceneSeed};
pub use subtitle::{mock_subtitles, Subtitle, SubtitleResponse};
pub use validation::{validate_preset, validate_video_path, ValidationError, ValidationErrorKind};
