//! Clip accumulation state.

use serde::Serialize;

use crate::segmenter::confidence_score;
use crate::transcript::Segment;

/// A finalized highlight clip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clip {
    /// Clip start time in seconds.
    pub start: f64,
    /// Clip end time in seconds.
    pub end: f64,
    /// Concatenated transcript text for the clip.
    pub text: String,
    /// Confidence score (0-100).
    pub score: u8,
}

impl Clip {
    /// Duration of this clip in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// The clip currently being built from consecutive segments.
///
/// Exactly one accumulator is live per engine pass. Finalizing consumes it,
/// so a clip can never be emitted twice and the reset-on-emission invariant
/// holds by construction. Member log-probabilities are kept as a running
/// sum and count; the raw segments are not retained.
#[derive(Debug)]
pub struct Accumulator {
    start: f64,
    end: f64,
    text: String,
    log_prob_sum: f64,
    member_count: usize,
}

impl Accumulator {
    /// Start a new accumulator from its first segment.
    pub fn from_segment(seg: &Segment) -> Self {
        Self {
            start: seg.start,
            end: seg.end,
            text: seg.text.clone(),
            log_prob_sum: seg.log_probability,
            member_count: 1,
        }
    }

    /// Merge a segment into the clip being built.
    pub fn absorb(&mut self, seg: &Segment) {
        self.end = seg.end;
        self.text.push(' ');
        self.text.push_str(&seg.text);
        self.log_prob_sum += seg.log_probability;
        self.member_count += 1;
    }

    /// Start time of the clip being built.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// End time of the clip being built.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Current accumulated duration in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Duration the clip would have if `seg` were merged in.
    pub fn prospective_duration(&self, seg: &Segment) -> f64 {
        seg.end - self.start
    }

    /// Silence gap between the accumulated clip and `seg`.
    ///
    /// Negative when segments overlap; not clamped.
    pub fn gap_to(&self, seg: &Segment) -> f64 {
        seg.start - self.end
    }

    /// Number of segments merged so far.
    pub fn member_count(&self) -> usize {
        self.member_count
    }

    /// Finalize the accumulator into an immutable clip, consuming it.
    pub fn finalize(self) -> Clip {
        let score = confidence_score(self.log_prob_sum, self.member_count);
        Clip {
            start: self.start,
            end: self.end,
            text: self.text,
            score,
        }
    }
}
