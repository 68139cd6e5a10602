//! Symmetric cropping of frames that are too wide for the publishing target.
//!
//! Social feeds render very wide stills as thin strips, so anything wider than
//! [`DisplayCropPolicy::max_ratio`] loses an equal share from its left and
//! right edges. How much width is kept depends on how wide the frame is, as
//! looked up in the policy's bucket table.

use image::RgbImage;
use image::imageops;
use log::{debug, error, info};

use crate::config::{DEFAULT_CROP_FRACTION, DEFAULT_MAX_DISPLAY_RATIO};
use crate::error::{CoreError, CoreResult};
use crate::processing::StageOutcome;

/// One row of the crop table: frames with a ratio up to and including
/// `up_to` keep `fraction` of their width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropBucket {
    pub up_to: f64,
    pub fraction: f64,
}

/// Maximum display ratio plus the table of kept-width fractions above it.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayCropPolicy {
    pub max_ratio: f64,
    /// Ordered by ascending `up_to`; the last bucket should be unbounded.
    pub buckets: Vec<CropBucket>,
}

impl Default for DisplayCropPolicy {
    /// Everything wider than 2.25:1 keeps 70% of its width.
    fn default() -> Self {
        Self {
            max_ratio: DEFAULT_MAX_DISPLAY_RATIO,
            buckets: vec![CropBucket {
                up_to: f64::INFINITY,
                fraction: DEFAULT_CROP_FRACTION,
            }],
        }
    }
}

impl DisplayCropPolicy {
    pub fn with_buckets(max_ratio: f64, buckets: Vec<CropBucket>) -> Self {
        Self { max_ratio, buckets }
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !self.max_ratio.is_finite() || self.max_ratio <= 0.0 {
            return Err(CoreError::Config(format!(
                "max display ratio must be positive, got {}",
                self.max_ratio
            )));
        }

        if self.buckets.is_empty() {
            return Err(CoreError::Config(
                "display crop policy needs at least one bucket".to_string(),
            ));
        }

        for bucket in &self.buckets {
            if !(bucket.fraction > 0.0 && bucket.fraction <= 1.0) {
                return Err(CoreError::Config(format!(
                    "crop fraction must be within (0, 1], got {}",
                    bucket.fraction
                )));
            }
        }

        if self.buckets.windows(2).any(|w| w[0].up_to >= w[1].up_to) {
            return Err(CoreError::Config(
                "crop buckets must be in ascending order".to_string(),
            ));
        }

        Ok(())
    }

    /// Fraction of the width to keep for a frame of `ratio`, or `None` when
    /// the frame is narrow enough to publish as is.
    ///
    /// Ratios beyond the last bucket use the last bucket's fraction.
    pub fn fraction_for(&self, ratio: f64) -> Option<f64> {
        if ratio <= self.max_ratio {
            return None;
        }
        self.buckets
            .iter()
            .find(|b| ratio <= b.up_to)
            .or(self.buckets.last())
            .map(|b| b.fraction)
    }
}

/// Horizontal span `(left, right)` kept when `width` is cut to `fraction`.
fn centered_span(width: u32, fraction: f64) -> CoreResult<(u32, u32)> {
    let width_f = f64::from(width);
    let new_width = width_f * fraction;
    let left = ((width_f - new_width) / 2.0) as u32;
    let right = ((width_f + new_width) / 2.0) as u32;

    if right <= left || right > width {
        return Err(CoreError::Crop(format!(
            "invalid span {left}..{right} for width {width}"
        )));
    }
    Ok((left, right))
}

fn crop_to_fraction(image: &RgbImage, fraction: f64) -> CoreResult<RgbImage> {
    let (width, height) = image.dimensions();
    if height == 0 {
        return Err(CoreError::Crop("image has no rows".to_string()));
    }
    let (left, right) = centered_span(width, fraction)?;
    Ok(imageops::crop_imm(image, left, 0, right - left, height).to_image())
}

/// Crops `image` from both sides if it is wider than the policy allows.
///
/// A failed crop is logged and the input is returned unchanged.
pub fn limit_display_ratio(image: RgbImage, policy: &DisplayCropPolicy) -> StageOutcome {
    let (width, height) = image.dimensions();
    if height == 0 {
        return StageOutcome::Unchanged(image);
    }

    let ratio = f64::from(width) / f64::from(height);
    let Some(fraction) = policy.fraction_for(ratio) else {
        debug!("Ratio {:.3} within {:.2}, no display crop", ratio, policy.max_ratio);
        return StageOutcome::Unchanged(image);
    };

    info!(
        "Cropping too wide image: ratio {:.3}, keeping {:.0}% of width",
        ratio,
        fraction * 100.0
    );
    match crop_to_fraction(&image, fraction) {
        Ok(cropped) => StageOutcome::Corrected(cropped),
        Err(e) => {
            error!("Display crop failed, keeping frame as is: {}", e);
            StageOutcome::Unchanged(image)
        }
    }
}
