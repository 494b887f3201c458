//! Mock subtitle generation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::SUCCESS_STATUS;

/// A timed subtitle cue, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Subtitle {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl Subtitle {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// Subtitle-generation response body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SubtitleResponse {
    pub status: String,
    pub subtitles: Vec<Subtitle>,
}

impl SubtitleResponse {
    pub fn success(subtitles: Vec<Subtitle>) -> Self {
        Self {
            status: SUCCESS_STATUS.to_string(),
            subtitles,
        }
    }
}

/// The fixed cue list returned for every video.
pub fn mock_subtitles() -> Vec<Subtitle> {
    vec![
        Subtitle::new(0.0, 3.2, "Welcome to EchoFinity."),
        Subtitle::new(3.2, 6.5, "This is your AI-powered media toolkit."),
        Subtitle::new(6.5, 9.0, "Let's generate something amazing."),
    ]
}
