//! Output writer trait definition.

use crate::error::Result;
use crate::segmenter::Clip;

/// Trait for writing clip results.
pub trait ClipWriter {
    /// Write the file header (if applicable).
    fn write_header(&mut self) -> Result<()>;

    /// Write a single clip.
    fn write_clip(&mut self, clip: &Clip) -> Result<()>;

    /// Finalize the output (flush, close, etc.).
    fn finalize(&mut self) -> Result<()>;
}
