//! CSV output format writer.

use crate::constants::{TIMESTAMP_DECIMAL_PLACES, UTF8_BOM};
use crate::error::Result;
use crate::output::ClipWriter;
use crate::segmenter::Clip;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV format clip writer.
pub struct CsvClipWriter {
    writer: BufWriter<File>,
    bom_enabled: bool,
}

impl CsvClipWriter {
    /// Create a new CSV writer.
    pub fn new(path: &Path, bom_enabled: bool) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            bom_enabled,
        })
    }
}

impl ClipWriter for CsvClipWriter {
    fn write_header(&mut self) -> Result<()> {
        if self.bom_enabled {
            self.writer.write_all(UTF8_BOM)?;
        }
        writeln!(self.writer, "Start (s),End (s),Score,Text")?;
        Ok(())
    }

    fn write_clip(&mut self, clip: &Clip) -> Result<()> {
        writeln!(
            self.writer,
            "{:.decimals$},{:.decimals$},{},{}",
            clip.start,
            clip.end,
            clip.score,
            escape_csv(&clip.text),
            decimals = TIMESTAMP_DECIMAL_PLACES,
        )?;
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Escape a value for CSV output.
fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
