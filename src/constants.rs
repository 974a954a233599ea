//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "clippa";

/// Segmentation policy defaults.
pub mod segmenter {
    /// Minimum clip duration in seconds before a pause may end it.
    pub const DEFAULT_MIN_CLIP_DURATION: f64 = 15.0;

    /// Maximum clip duration in seconds, enforced unconditionally.
    pub const DEFAULT_MAX_CLIP_DURATION: f64 = 120.0;

    /// Silence gap in seconds treated as a natural break.
    pub const DEFAULT_PAUSE_THRESHOLD: f64 = 1.5;
}

/// Log-probability assumed for segments that carry no confidence data.
///
/// `exp(-1)` maps to a score of 37, a neutral-low confidence rather than
/// 0 or 100.
pub const DEFAULT_LOG_PROBABILITY: f64 = -1.0;

/// Clip confidence score bounds.
pub mod score {
    /// Minimum clip score.
    pub const MIN: u8 = 0;
    /// Maximum clip score.
    pub const MAX: u8 = 100;
}

/// Output file extensions by format.
pub mod output_extensions {
    /// JSON output extension.
    pub const JSON: &str = ".clips.json";
    /// CSV output extension.
    pub const CSV: &str = ".clips.csv";
}

/// File extension expected for input transcript files.
pub const TRANSCRIPT_EXTENSION: &str = "json";

/// Decimal places for clip timestamps in CSV output.
pub const TIMESTAMP_DECIMAL_PLACES: usize = 2;

/// UTF-8 Byte Order Mark for Excel compatibility in CSV files.
pub const UTF8_BOM: &[u8; 3] = b"\xEF\xBB\xBF";
