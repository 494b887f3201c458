//! Request validation.
//!
//! Validation is a precondition gate: every check here runs before any mock
//! generation, and a failure is always a client error.

use thiserror::Error;

use crate::preset::ColorPreset;

/// Wire name of the video path field.
pub const VIDEO_PATH_FIELD: &str = "videoPath";

/// Wire name of the color preset field.
pub const PRESET_FIELD: &str = "preset";

/// Rejected request input. The `Display` text is the client-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required and cannot be empty")]
    MissingField { field: &'static str },

    #[error("{field} must be one of: {}", .allowed.join(", "))]
    InvalidEnum {
        field: &'static str,
        allowed: Vec<&'static str>,
    },
}

/// Coarse classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    MissingField,
    InvalidEnum,
}

impl ValidationErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationErrorKind::MissingField => "missing_field",
            ValidationErrorKind::InvalidEnum => "invalid_enum",
        }
    }
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::MissingField { .. } => ValidationErrorKind::MissingField,
            ValidationError::InvalidEnum { .. } => ValidationErrorKind::InvalidEnum,
        }
    }

    /// Name of the offending request field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field } | ValidationError::InvalidEnum { field, .. } => {
                *field
            }
        }
    }
}

/// Check that a video path is present and not blank.
///
/// The path is returned untouched on success; only the emptiness check
/// looks at the trimmed value.
pub fn validate_video_path(video_path: Option<&str>) -> Result<&str, ValidationError> {
    match video_path {
        Some(path) if !path.trim().is_empty() => Ok(path),
        _ => Err(ValidationError::MissingField {
            field: VIDEO_PATH_FIELD,
        }),
    }
}

/// Resolve a preset name, case-insensitively.
pub fn validate_preset(preset: &str) -> Result<ColorPreset, ValidationError> {
    preset
        .parse::<ColorPreset>()
        .map_err(|_| ValidationError::InvalidEnum {
            field: PRESET_FIELD,
            allowed: ColorPreset::sorted_names(),
        })
}
