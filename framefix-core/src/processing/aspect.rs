//! Display aspect ratio value type and parsing.

use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Narrowest ratio accepted from a probe.
pub const MIN_DISPLAY_ASPECT_RATIO: f64 = 0.1;

/// Widest ratio accepted from a probe.
pub const MAX_DISPLAY_ASPECT_RATIO: f64 = 10.0;

/// The width:height ratio a video is meant to be shown at, independent of
/// its stored pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayAspectRatio(f64);

impl DisplayAspectRatio {
    /// Wraps a ratio, rejecting anything outside
    /// [`MIN_DISPLAY_ASPECT_RATIO`]..=[`MAX_DISPLAY_ASPECT_RATIO`] (which
    /// includes zero, negative and non-finite values).
    pub fn new(ratio: f64) -> CoreResult<Self> {
        if (MIN_DISPLAY_ASPECT_RATIO..=MAX_DISPLAY_ASPECT_RATIO).contains(&ratio) {
            Ok(Self(ratio))
        } else {
            Err(CoreError::AspectRatioParse(format!(
                "ratio must be between {MIN_DISPLAY_ASPECT_RATIO} and \
                 {MAX_DISPLAY_ASPECT_RATIO}, got {ratio}"
            )))
        }
    }

    /// Parses the `W:H` form ffprobe reports, e.g. `16:9`.
    ///
    /// Both sides must be positive integers; ffprobe's `0:1` placeholder for
    /// an unknown ratio is rejected.
    pub fn parse_colon(value: &str) -> CoreResult<Self> {
        let (w, h) = value.trim().split_once(':').ok_or_else(|| {
            CoreError::AspectRatioParse(format!("expected W:H, got '{value}'"))
        })?;

        let parse_side = |side: &str| {
            side.trim().parse::<u32>().map_err(|e| {
                CoreError::AspectRatioParse(format!("invalid component '{side}' in '{value}': {e}"))
            })
        };
        let (w, h) = (parse_side(w)?, parse_side(h)?);

        if w == 0 || h == 0 {
            return Err(CoreError::AspectRatioParse(format!(
                "zero component in '{value}'"
            )));
        }

        Self::new(f64::from(w) / f64::from(h))
    }

    /// Parses a decimal ratio such as mediainfo's `1.778`.
    pub fn parse_decimal(value: &str) -> CoreResult<Self> {
        let ratio = value.trim().parse::<f64>().map_err(|e| {
            CoreError::AspectRatioParse(format!("invalid decimal ratio '{value}': {e}"))
        })?;
        Self::new(ratio)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for DisplayAspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
