//! Saturation statistics used to tell color frames from monochrome ones.
//!
//! The score is the mean of the HSV saturation channel on a 0-255 scale.
//! Saturation is computed per pixel as `(max - min) / max`, scaled to 255 and
//! truncated, with grey and black pixels scoring zero.

use image::RgbImage;

/// Saturation of a single RGB pixel on a 0-255 scale.
pub fn pixel_saturation(r: u8, g: u8, b: u8) -> u8 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == min {
        return 0;
    }
    let chroma = f32::from(max - min) / f32::from(max);
    (chroma * 255.0) as u8
}

/// Mean HSV saturation of `image`, in 0-255. An empty image scores 0.
pub fn saturation_score(image: &RgbImage) -> f64 {
    let pixels = u64::from(image.width()) * u64::from(image.height());
    if pixels == 0 {
        return 0.0;
    }

    let total: u64 = image
        .pixels()
        .map(|p| u64::from(pixel_saturation(p[0], p[1], p[2])))
        .sum();

    total as f64 / pixels as f64
}

/// Outcome of classifying a frame against a saturation threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorClassification {
    pub score: f64,
    pub threshold: f64,
}

impl ColorClassification {
    pub fn classify(image: &RgbImage, threshold: f64) -> Self {
        Self {
            score: saturation_score(image),
            threshold,
        }
    }

    /// True when the frame carries enough color to warrant a palette.
    pub fn is_color(&self) -> bool {
        self.score > self.threshold
    }

    /// True when the frame is too desaturated for border trimming to be trusted.
    pub fn below_threshold(&self) -> bool {
        self.score < self.threshold
    }
}
