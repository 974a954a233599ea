//! Transcript segmentation into highlight clips.
//!
//! This module implements the single-pass greedy grouping of speech
//! segments into non-overlapping clips: consecutive segments are merged
//! into an accumulator until a hard duration cap or a natural pause ends
//! the clip, and each finalized clip gets a confidence score derived from
//! its members' log-probabilities.

mod accumulator;
mod engine;
mod scoring;

pub use accumulator::{Accumulator, Clip};
pub use engine::{SplitReason, segment_clips};
pub use scoring::confidence_score;
