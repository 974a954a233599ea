//! Configuration validation.

use crate::config::SegmenterConfig;
use crate::error::{Error, Result};

/// Validate segmentation policy settings.
///
/// Checked once on the effective settings, after CLI overrides have been
/// applied on top of the config file.
pub fn validate_segmenter_config(config: &SegmenterConfig) -> Result<()> {
    let all = [
        ("min_clip_duration", config.min_clip_duration),
        ("max_clip_duration", config.max_clip_duration),
        ("pause_threshold", config.pause_threshold),
    ];

    for (name, value) in all {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::ConfigValidation {
                message: format!("{name} must be a positive number, got {value}"),
            });
        }
    }

    if config.min_clip_duration >= config.max_clip_duration {
        return Err(Error::ConfigValidation {
            message: format!(
                "min_clip_duration ({}) must be less than max_clip_duration ({})",
                config.min_clip_duration, config.max_clip_duration
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_segmenter_config(&SegmenterConfig::default()).is_ok());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let config = SegmenterConfig {
            pause_threshold: -1.0,
            ..SegmenterConfig::default()
        };
        assert!(matches!(
            validate_segmenter_config(&config),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_nan_rejected() {
        let config = SegmenterConfig {
            max_clip_duration: f64::NAN,
            ..SegmenterConfig::default()
        };
        assert!(validate_segmenter_config(&config).is_err());
    }

    #[test]
    fn test_min_not_below_max_rejected() {
        let config = SegmenterConfig {
            min_clip_duration: 120.0,
            max_clip_duration: 120.0,
            ..SegmenterConfig::default()
        };
        assert!(validate_segmenter_config(&config).is_err());
    }
}
