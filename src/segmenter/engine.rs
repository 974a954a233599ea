//! The segmentation engine.

use tracing::debug;

use crate::config::SegmenterConfig;
use crate::segmenter::{Accumulator, Clip};
use crate::transcript::Segment;

/// Why a clip boundary was introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitReason {
    /// Merging the next segment would exceed the maximum clip duration.
    MaxDuration,
    /// A silence gap exceeded the pause threshold with enough accumulated
    /// content.
    Pause,
}

/// Group an ordered segment sequence into an ordered clip sequence.
///
/// Single forward pass: each segment either merges into the clip being
/// built or ends it and starts the next one. Two rules end a clip, checked
/// in order:
///
/// 1. Merging the segment would push the clip past
///    `max_clip_duration` (unconditional).
/// 2. The gap to the segment exceeds `pause_threshold` and the clip has
///    already accumulated more than `min_clip_duration` of content.
///
/// The triggering segment always becomes the first member of the next
/// clip, and whatever is accumulated when the stream ends is emitted
/// unconditionally, so every input segment lands in exactly one clip.
///
/// Segments are assumed to arrive in non-decreasing start order.
/// Out-of-order or overlapping input is not rejected: a negative gap
/// simply never reads as a pause.
pub fn segment_clips(segments: &[Segment], config: &SegmenterConfig) -> Vec<Clip> {
    let mut clips = Vec::new();
    let mut current: Option<Accumulator> = None;

    for seg in segments {
        current = Some(match current.take() {
            None => Accumulator::from_segment(seg),
            Some(mut acc) => {
                if let Some(reason) = split_decision(&acc, seg, config) {
                    debug!(
                        start = acc.start(),
                        end = acc.end(),
                        members = acc.member_count(),
                        ?reason,
                        "ending clip"
                    );
                    clips.push(acc.finalize());
                    Accumulator::from_segment(seg)
                } else {
                    acc.absorb(seg);
                    acc
                }
            }
        });
    }

    if let Some(acc) = current {
        clips.push(acc.finalize());
    }

    clips
}

/// Decide whether `next` ends the accumulated clip, and under which rule.
///
/// The hard cap is checked first and short-circuits the pause rule; the
/// minimum-duration gate applies only to pause splits.
fn split_decision(
    acc: &Accumulator,
    next: &Segment,
    config: &SegmenterConfig,
) -> Option<SplitReason> {
    if acc.prospective_duration(next) > config.max_clip_duration {
        return Some(SplitReason::MaxDuration);
    }

    if acc.gap_to(next) > config.pause_threshold && acc.duration() > config.min_clip_duration {
        return Some(SplitReason::Pause);
    }

    None
}
