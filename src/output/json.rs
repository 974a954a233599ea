//! JSON output format writer.

use crate::config::SegmenterConfig;
use crate::error::Result;
use crate::output::ClipWriter;
use crate::segmenter::Clip;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// JSON result file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonResultFile {
    /// Source transcript file name.
    pub source_file: String,
    /// Analysis timestamp.
    pub analysis_date: DateTime<Utc>,
    /// Segmentation settings.
    pub settings: JsonSettings,
    /// Highlight clips.
    pub clips: Vec<JsonClip>,
    /// Summary statistics.
    pub summary: JsonSummary,
}

/// Segmentation settings for JSON output.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonSettings {
    /// Minimum clip duration in seconds.
    pub min_clip_duration: f64,
    /// Maximum clip duration in seconds.
    pub max_clip_duration: f64,
    /// Pause threshold in seconds.
    pub pause_threshold: f64,
}

/// Single clip in JSON format.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonClip {
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
    /// Confidence score (0-100).
    pub score: u8,
    /// Transcript text.
    pub text: String,
}

/// Summary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonSummary {
    /// Total number of clips.
    pub total_clips: usize,
    /// Sum of clip durations in seconds.
    pub highlighted_seconds: f64,
    /// Mean clip score, 0 when there are no clips.
    pub mean_score: f64,
}

/// Writer for JSON clip output files.
pub struct JsonResultWriter {
    /// Collected clips.
    clips: Vec<Clip>,
    /// Output file path.
    output_path: PathBuf,
    /// Source transcript file name.
    source_file: String,
    /// Segmentation settings in effect.
    settings: SegmenterConfig,
}

impl JsonResultWriter {
    /// Create a new JSON result writer.
    pub fn new(output_path: &Path, source_file: &str, settings: SegmenterConfig) -> Self {
        Self {
            clips: Vec::new(),
            output_path: output_path.to_path_buf(),
            source_file: source_file.to_string(),
            settings,
        }
    }

    /// Compute summary from collected clips.
    fn compute_summary(&self) -> JsonSummary {
        let highlighted_seconds: f64 = self.clips.iter().map(Clip::duration).sum();
        let mean_score = if self.clips.is_empty() {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            {
                self.clips.iter().map(|c| f64::from(c.score)).sum::<f64>() / self.clips.len() as f64
            }
        };

        JsonSummary {
            total_clips: self.clips.len(),
            highlighted_seconds,
            mean_score,
        }
    }
}

impl ClipWriter for JsonResultWriter {
    fn write_header(&mut self) -> Result<()> {
        // No header for JSON - written at finalize
        Ok(())
    }

    fn write_clip(&mut self, clip: &Clip) -> Result<()> {
        self.clips.push(clip.clone());
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        let json_clips: Vec<JsonClip> = self
            .clips
            .iter()
            .map(|c| JsonClip {
                start: c.start,
                end: c.end,
                score: c.score,
                text: c.text.clone(),
            })
            .collect();

        let result = JsonResultFile {
            source_file: self.source_file.clone(),
            analysis_date: Utc::now(),
            settings: JsonSettings {
                min_clip_duration: self.settings.min_clip_duration,
                max_clip_duration: self.settings.max_clip_duration,
                pause_threshold: self.settings.pause_threshold,
            },
            clips: json_clips,
            summary: self.compute_summary(),
        };

        let file = File::create(&self.output_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &result).map_err(|e| {
            crate::error::Error::JsonWrite {
                path: self.output_path.clone(),
                source: e,
            }
        })?;

        Ok(())
    }
}
