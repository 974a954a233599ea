//! Transcript ingestion.
//!
//! This module is the boundary to the external speech-recognition engine:
//! it parses transcript files into ordered [`Segment`] sequences for the
//! segmentation engine.

mod parser;
mod types;

pub use parser::parse_transcript_file;
pub use types::Segment;
