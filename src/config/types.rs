//! Configuration type definitions.

use crate::constants::segmenter::{
    DEFAULT_MAX_CLIP_DURATION, DEFAULT_MIN_CLIP_DURATION, DEFAULT_PAUSE_THRESHOLD,
};
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Segmentation policy settings.
    #[serde(default)]
    pub segmenter: SegmenterConfig,

    /// Default settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Segmentation policy settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Minimum clip duration in seconds before a pause may end it.
    pub min_clip_duration: f64,

    /// Maximum clip duration in seconds, enforced unconditionally.
    pub max_clip_duration: f64,

    /// Silence gap in seconds treated as a natural break.
    pub pause_threshold: f64,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            min_clip_duration: DEFAULT_MIN_CLIP_DURATION,
            max_clip_duration: DEFAULT_MAX_CLIP_DURATION,
            pause_threshold: DEFAULT_PAUSE_THRESHOLD,
        }
    }
}

/// Default processing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Output formats.
    pub formats: Vec<OutputFormat>,

    /// Include UTF-8 BOM in CSV output for Excel compatibility.
    pub csv_bom: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            formats: vec![OutputFormat::Json],
            csv_bom: true,
        }
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON result envelope.
    Json,
    /// CSV clip table.
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}
