//! Letterbox and pillarbox removal.
//!
//! The top-left pixel is taken as the border color. Every pixel that differs
//! from it in any channel belongs to the picture, and the frame is cropped to
//! the smallest box holding all of them.

use image::RgbImage;
use image::imageops;
use log::{debug, info, warn};

use crate::processing::StageOutcome;
use crate::processing::color::ColorClassification;

/// A sub-region of an image. `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// True when the box spans the whole of a `width` x `height` image.
    pub fn covers(&self, width: u32, height: u32) -> bool {
        self.left == 0 && self.top == 0 && self.right == width && self.bottom == height
    }
}

/// Difference between two channel values, doubled so faint differences
/// stand out, saturating at 255.
fn amplified_difference(a: u8, b: u8) -> u8 {
    a.abs_diff(b).saturating_mul(2)
}

/// Smallest box holding every pixel that differs from the top-left pixel.
///
/// Returns `None` for an empty image or when the whole image is one color.
pub fn content_bounding_box(image: &RgbImage) -> Option<BoundingBox> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return None;
    }

    let background = *image.get_pixel(0, 0);
    let mut bbox: Option<BoundingBox> = None;

    for (x, y, px) in image.enumerate_pixels() {
        let differs = px
            .0
            .iter()
            .zip(background.0.iter())
            .any(|(&a, &b)| amplified_difference(a, b) != 0);
        if !differs {
            continue;
        }

        bbox = Some(match bbox {
            None => BoundingBox {
                left: x,
                top: y,
                right: x + 1,
                bottom: y + 1,
            },
            Some(b) => BoundingBox {
                left: b.left.min(x),
                top: b.top.min(y),
                right: b.right.max(x + 1),
                bottom: b.bottom.max(y + 1),
            },
        });
    }

    bbox
}

/// Removes uniform borders from `image`.
///
/// Frames scoring below `threshold` on the saturation scale are returned
/// unchanged, as are single-color frames.
pub fn trim_borders(image: RgbImage, threshold: f64) -> StageOutcome {
    let class = ColorClassification::classify(&image, threshold);
    if class.below_threshold() {
        debug!(
            "Saturation {:.2} below {:.2}, skipping border trim",
            class.score, threshold
        );
        return StageOutcome::Unchanged(image);
    }

    let Some(bbox) = content_bounding_box(&image) else {
        warn!("Frame is a single color, no border to trim");
        return StageOutcome::Unchanged(image);
    };

    let (width, height) = image.dimensions();
    if bbox.covers(width, height) {
        debug!("No uniform border found");
        return StageOutcome::Unchanged(image);
    }

    info!(
        "Trimming borders: {}x{} -> {}x{} at ({}, {})",
        width,
        height,
        bbox.width(),
        bbox.height(),
        bbox.left,
        bbox.top
    );
    let cropped = imageops::crop_imm(&image, bbox.left, bbox.top, bbox.width(), bbox.height());
    StageOutcome::Corrected(cropped.to_image())
}
