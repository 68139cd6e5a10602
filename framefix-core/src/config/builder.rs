// ============================================================================
// framefix-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for FixConfig
//
// This module implements a fluent builder for FixConfig. Every field starts
// from the library default, so callers only name what they change.

// ---- Standard library imports ----
use std::path::PathBuf;
use std::time::Duration;

// ---- Internal crate imports ----
use super::FixConfig;
use crate::processing::display_crop::DisplayCropPolicy;

/// Builder for creating FixConfig instances.
///
/// # Examples
///
/// ```rust
/// use framefix_core::config::FixConfigBuilder;
/// use framefix_core::processing::display_crop::{CropBucket, DisplayCropPolicy};
///
/// let policy = DisplayCropPolicy::with_buckets(
///     2.25,
///     vec![
///         CropBucket { up_to: 2.4, fraction: 0.8 },
///         CropBucket { up_to: f64::INFINITY, fraction: 0.7 },
///     ],
/// );
///
/// let config = FixConfigBuilder::new()
///     .monochrome_threshold(35.0)
///     .display_crop(policy)
///     .ffprobe_bin("/usr/local/bin/ffprobe")
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixConfigBuilder {
    config: FixConfig,
}

impl FixConfigBuilder {
    /// Creates a new builder holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the saturation threshold separating monochrome from color.
    pub fn monochrome_threshold(mut self, threshold: f64) -> Self {
        self.config.monochrome_threshold = threshold;
        self
    }

    /// Replaces the display crop policy.
    pub fn display_crop(mut self, policy: DisplayCropPolicy) -> Self {
        self.config.display_crop = policy;
        self
    }

    /// Sets the widest ratio published without cropping, keeping the table.
    pub fn max_display_ratio(mut self, ratio: f64) -> Self {
        self.config.display_crop.max_ratio = ratio;
        self
    }

    /// Sets the bound on each external probe invocation.
    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.config.probe_timeout = timeout;
        self
    }

    /// Sets the ffprobe executable.
    pub fn ffprobe_bin<P: Into<PathBuf>>(mut self, bin: P) -> Self {
        self.config.ffprobe_bin = bin.into();
        self
    }

    /// Sets the mediainfo executable.
    pub fn mediainfo_bin<P: Into<PathBuf>>(mut self, bin: P) -> Self {
        self.config.mediainfo_bin = bin.into();
        self
    }

    /// Builds the configuration. Call [`FixConfig::validate`] before use.
    pub fn build(self) -> FixConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_match_config_defaults() {
        assert_eq!(FixConfigBuilder::new().build(), FixConfig::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = FixConfigBuilder::new()
            .monochrome_threshold(25.0)
            .max_display_ratio(2.0)
            .probe_timeout(Duration::from_secs(5))
            .mediainfo_bin("/opt/mediainfo")
            .build();

        assert_eq!(config.monochrome_threshold, 25.0);
        assert_eq!(config.display_crop.max_ratio, 2.0);
        assert_eq!(config.probe_timeout, Duration::from_secs(5));
        assert_eq!(config.mediainfo_bin, PathBuf::from("/opt/mediainfo"));
        assert_eq!(config.ffprobe_bin, PathBuf::from("ffprobe"));
    }
}
