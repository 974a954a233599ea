//! Single file processing pipeline.

use crate::config::{OutputFormat, SegmenterConfig};
use crate::error::{Error, Result};
use crate::output::{ClipWriter, CsvClipWriter, JsonResultWriter};
use crate::pipeline::output_path_for;
use crate::segmenter::{Clip, segment_clips};
use crate::transcript::parse_transcript_file;
use std::path::Path;
use tracing::{debug, info};

/// Process a single transcript file and write clip results.
///
/// # Arguments
///
/// * `input_path` - Path to input transcript file
/// * `output_dir` - Directory for output files
/// * `segmenter_config` - Effective segmentation settings
/// * `formats` - Output formats to generate
/// * `csv_bom_enabled` - Whether to include UTF-8 BOM in CSV output for
///   Excel compatibility
pub fn process_file(
    input_path: &Path,
    output_dir: &Path,
    segmenter_config: &SegmenterConfig,
    formats: &[OutputFormat],
    csv_bom_enabled: bool,
) -> Result<ProcessResult> {
    use std::time::Instant;

    let start_time = Instant::now();

    info!("Processing: {}", input_path.display());

    let segments = parse_transcript_file(input_path)?;
    debug!("Parsed {} segments", segments.len());

    let clips = segment_clips(&segments, segmenter_config);

    info!(
        "Built {} clip(s) from {} segment(s)",
        clips.len(),
        segments.len()
    );

    if !output_dir.exists() {
        std::fs::create_dir_all(output_dir).map_err(|e| Error::OutputDirCreateFailed {
            path: output_dir.to_path_buf(),
            source: e,
        })?;
    }

    for format in formats {
        write_output(
            input_path,
            output_dir,
            *format,
            &clips,
            segmenter_config,
            csv_bom_enabled,
        )?;
    }

    let duration_secs = start_time.elapsed().as_secs_f64();

    Ok(ProcessResult {
        segments: segments.len(),
        clips: clips.len(),
        duration_secs,
    })
}

/// Write clips to an output file.
fn write_output(
    input_path: &Path,
    output_dir: &Path,
    format: OutputFormat,
    clips: &[Clip],
    segmenter_config: &SegmenterConfig,
    csv_bom_enabled: bool,
) -> Result<()> {
    let output_path = output_path_for(input_path, output_dir, format);
    debug!("Writing {} output: {}", format, output_path.display());

    let source_file = input_path
        .file_name()
        .map_or_else(|| "unknown".into(), |n| n.to_string_lossy());

    let mut writer: Box<dyn ClipWriter> = match format {
        OutputFormat::Json => Box::new(JsonResultWriter::new(
            &output_path,
            &source_file,
            *segmenter_config,
        )),
        OutputFormat::Csv => Box::new(CsvClipWriter::new(&output_path, csv_bom_enabled)?),
    };

    writer.write_header()?;
    for clip in clips {
        writer.write_clip(clip)?;
    }
    writer.finalize()?;

    Ok(())
}

/// Result of processing a single file.
#[derive(Debug)]
pub struct ProcessResult {
    /// Number of input segments.
    pub segments: usize,
    /// Number of clips emitted.
    pub clips: usize,
    /// Processing duration in seconds.
    pub duration_secs: f64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::output::JsonResultFile;
    use tempfile::tempdir;

    #[test]
    fn test_process_file_writes_json() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("talk.json");
        std::fs::write(
            &input,
            r#"{"segments": [
                {"start": 0.0, "end": 5.0, "text": " hello", "avg_logprob": -0.1},
                {"start": 5.5, "end": 6.0, "text": " world", "avg_logprob": -0.2}
            ]}"#,
        )
        .unwrap();

        let result = process_file(
            &input,
            dir.path(),
            &SegmenterConfig::default(),
            &[OutputFormat::Json],
            false,
        )
        .unwrap();

        assert_eq!(result.segments, 2);
        assert_eq!(result.clips, 1);

        let content = std::fs::read_to_string(dir.path().join("talk.clips.json")).unwrap();
        let parsed: JsonResultFile = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.clips.len(), 1);
        assert_eq!(parsed.clips[0].text, "hello world");
        assert_eq!(parsed.clips[0].score, 86);
    }

    #[test]
    fn test_process_file_empty_transcript_is_not_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("silent.json");
        std::fs::write(&input, r#"{"segments": []}"#).unwrap();

        let result = process_file(
            &input,
            dir.path(),
            &SegmenterConfig::default(),
            &[OutputFormat::Json, OutputFormat::Csv],
            false,
        )
        .unwrap();

        assert_eq!(result.segments, 0);
        assert_eq!(result.clips, 0);
        assert!(dir.path().join("silent.clips.json").exists());
        assert!(dir.path().join("silent.clips.csv").exists());
    }

    #[test]
    fn test_process_file_malformed_segment_fails_whole_run() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.json");
        std::fs::write(
            &input,
            r#"{"segments": [{"start": 9.0, "end": 3.0, "text": "backwards"}]}"#,
        )
        .unwrap();

        let result = process_file(
            &input,
            dir.path(),
            &SegmenterConfig::default(),
            &[OutputFormat::Json],
            false,
        );

        assert!(matches!(result, Err(Error::MalformedSegment { .. })));
        // No partial output
        assert!(!dir.path().join("bad.clips.json").exists());
    }

    #[test]
    fn test_process_file_creates_output_dir() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("talk.json");
        std::fs::write(&input, r#"{"segments": []}"#).unwrap();
        let out = dir.path().join("out/nested");

        process_file(
            &input,
            &out,
            &SegmenterConfig::default(),
            &[OutputFormat::Csv],
            true,
        )
        .unwrap();

        assert!(out.join("talk.clips.csv").exists());
    }
}
