//! Configuration structures and constants for the framefix-core library.
//!
//! This module provides the tunables of the frame-correction pipeline: the
//! saturation threshold, the display crop policy, and how the external probe
//! tools are located and bounded.

mod builder;

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{CoreError, CoreResult};
use crate::processing::display_crop::DisplayCropPolicy;

pub use builder::FixConfigBuilder;

// Default constants

/// Default mean HSV saturation (0-255) below which a frame counts as monochrome.
/// Used both to skip border trimming and for the final palette decision.
pub const DEFAULT_MONOCHROME_THRESHOLD: f64 = 35.0;

/// Default widest width:height ratio that is published without cropping.
pub const DEFAULT_MAX_DISPLAY_RATIO: f64 = 2.25;

/// Default fraction of the width kept when a frame is too wide.
pub const DEFAULT_CROP_FRACTION: f64 = 0.7;

/// Default upper bound on a single external probe invocation.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(30);

/// Default ffprobe executable, resolved through `PATH`.
pub const DEFAULT_FFPROBE_BIN: &str = "ffprobe";

/// Default mediainfo executable, resolved through `PATH`.
pub const DEFAULT_MEDIAINFO_BIN: &str = "mediainfo";

/// Main configuration structure for the framefix-core library.
///
/// All fields have defaults matching the behaviour expected by the publishing
/// bot, so `FixConfig::default()` is the usual starting point.
///
/// # Examples
///
/// ```rust
/// use framefix_core::config::FixConfigBuilder;
/// use std::time::Duration;
///
/// let config = FixConfigBuilder::new()
///     .monochrome_threshold(25.0)
///     .probe_timeout(Duration::from_secs(10))
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FixConfig {
    /// Saturation score separating monochrome from color frames.
    pub monochrome_threshold: f64,

    /// Policy for cropping frames wider than the publishing target allows.
    pub display_crop: DisplayCropPolicy,

    /// Upper bound on each ffprobe/mediainfo run.
    pub probe_timeout: Duration,

    /// ffprobe executable used by the primary probe.
    pub ffprobe_bin: PathBuf,

    /// mediainfo executable used by the fallback probe.
    pub mediainfo_bin: PathBuf,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            monochrome_threshold: DEFAULT_MONOCHROME_THRESHOLD,
            display_crop: DisplayCropPolicy::default(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            ffprobe_bin: PathBuf::from(DEFAULT_FFPROBE_BIN),
            mediainfo_bin: PathBuf::from(DEFAULT_MEDIAINFO_BIN),
        }
    }
}

impl FixConfig {
    /// Checks that every tunable is usable.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.monochrome_threshold.is_finite()
            || !(0.0..=255.0).contains(&self.monochrome_threshold)
        {
            return Err(CoreError::Config(format!(
                "monochrome threshold must be within 0-255, got {}",
                self.monochrome_threshold
            )));
        }

        if self.probe_timeout.is_zero() {
            return Err(CoreError::Config(
                "probe timeout must be greater than zero".to_string(),
            ));
        }

        if self.ffprobe_bin.as_os_str().is_empty() || self.mediainfo_bin.as_os_str().is_empty() {
            return Err(CoreError::Config(
                "probe executables must not be empty".to_string(),
            ));
        }

        self.display_crop.validate()
    }
}
