//! Clip confidence scoring.

use crate::constants::score;

/// Convert accumulated member log-probabilities into a 0-100 clip score.
///
/// The log-probabilities are averaged in log space first and exponentiated
/// after, a geometric-mean-like aggregate. Averaging the per-segment
/// probabilities instead would change the numeric result.
///
/// Zero members or non-finite arithmetic yield a score of 0 rather than an
/// error: a bad confidence value must not invalidate an otherwise valid
/// clip's time range and text.
pub fn confidence_score(log_prob_sum: f64, member_count: usize) -> u8 {
    if member_count == 0 {
        return score::MIN;
    }

    #[allow(clippy::cast_precision_loss)]
    let avg_log_prob = log_prob_sum / member_count as f64;
    let scaled = (avg_log_prob.exp() * 100.0).round();

    if !scaled.is_finite() {
        return score::MIN;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        scaled.clamp(f64::from(score::MIN), f64::from(score::MAX)) as u8
    }
}
