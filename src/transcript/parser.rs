//! Transcript file parsing.
//!
//! Parses Whisper-style transcript JSON files to extract speech segments
//! for clip segmentation. Uses serde for robust parsing.

use std::path::Path;

use serde::Deserialize;

use crate::Error;
use crate::constants::DEFAULT_LOG_PROBABILITY;
use crate::transcript::Segment;

/// Top-level transcript file structure.
///
/// Recognition engines emit more fields (full text, language, word
/// timings); only the segment list matters here.
#[derive(Debug, Deserialize)]
struct TranscriptFile {
    #[serde(default)]
    segments: Vec<SegmentRecord>,
}

/// Internal record for JSON deserialization.
#[derive(Debug, Deserialize)]
struct SegmentRecord {
    start: Option<f64>,
    end: Option<f64>,
    #[serde(default)]
    text: String,
    // Whisper writes `avg_logprob`; other engines spell it out.
    #[serde(default, alias = "log_probability")]
    avg_logprob: Option<f64>,
}

/// Parse a transcript file and return its segments in arrival order.
///
/// Supports Whisper-style JSON with a top-level `segments` array. Each
/// segment must carry `start` and `end` with `start <= end`; `text` is
/// trimmed, and a missing `avg_logprob` defaults to −1.0 (a neutral-low
/// confidence of 37 once scored).
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The JSON cannot be parsed
/// - A segment is missing `start` or `end`, has a non-finite timestamp,
///   or violates `start <= end`
///
/// Returns `Ok(vec![])` if the file contains no segments.
pub fn parse_transcript_file(path: &Path) -> Result<Vec<Segment>, Error> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::TranscriptRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let transcript: TranscriptFile =
        serde_json::from_str(&contents).map_err(|e| Error::TranscriptParseFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut segments = Vec::with_capacity(transcript.segments.len());

    for (index, record) in transcript.segments.into_iter().enumerate() {
        let (Some(start), Some(end)) = (record.start, record.end) else {
            return Err(Error::MalformedSegment {
                message: format!("segment {index}: missing start or end time"),
            });
        };

        if !start.is_finite() || !end.is_finite() {
            return Err(Error::MalformedSegment {
                message: format!("segment {index}: non-finite time range ({start}, {end})"),
            });
        }

        if end < start {
            return Err(Error::MalformedSegment {
                message: format!(
                    "segment {index}: end time ({end}) must not be before start time ({start})"
                ),
            });
        }

        segments.push(Segment {
            start,
            end,
            text: record.text.trim().to_string(),
            log_probability: record.avg_logprob.unwrap_or(DEFAULT_LOG_PROBABILITY),
        });
    }

    Ok(segments)
}
