//! Color-correction preset definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Named color-correction style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ColorPreset {
    /// Teal-and-orange film grade
    Cinematic,
    /// Warmer white balance
    Warm,
    /// Cooler white balance
    Cool,
    /// Faded, grain-heavy look
    Vintage,
}

impl ColorPreset {
    /// Every accepted preset. Parsing and error listings both read from here.
    pub const ALL: &'static [ColorPreset] = &[
        ColorPreset::Cinematic,
        ColorPreset::Warm,
        ColorPreset::Cool,
        ColorPreset::Vintage,
    ];

    /// Returns the preset name as used on the wire and in filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorPreset::Cinematic => "cinematic",
            ColorPreset::Warm => "warm",
            ColorPreset::Cool => "cool",
            ColorPreset::Vintage => "vintage",
        }
    }

    /// Preset names sorted alphabetically.
    pub fn sorted_names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Self::ALL.iter().map(ColorPreset::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Display for ColorPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColorPreset {
    type Err = PresetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|preset| preset.as_str() == lower)
            .ok_or_else(|| PresetParseError(s.to_string()))
    }
}

#[derive(Debug, Error)]
#[error("Unknown color preset: {0}")]
pub struct PresetParseError(String);
