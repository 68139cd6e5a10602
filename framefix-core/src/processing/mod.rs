//! Frame-correction stages and the pipeline that chains them.
//!
//! Responsibilities:
//! - Rescale anamorphic frames to their display aspect ratio
//! - Trim uniform letterbox/pillarbox borders
//! - Crop frames too wide for the publishing target
//! - Classify frames as color or monochrome
//!
//! Every stage after rescaling takes ownership of an image and hands back a
//! [`StageOutcome`], so "nothing to do" and "could not do it" are ordinary
//! values rather than errors.

use image::RgbImage;

pub mod aspect;
pub mod color;
pub mod display_crop;
pub mod frame;
pub mod pipeline;
pub mod trim;

pub use aspect::DisplayAspectRatio;
pub use color::{ColorClassification, saturation_score};
pub use display_crop::{CropBucket, DisplayCropPolicy, limit_display_ratio};
pub use frame::{ChannelOrder, RawFrame, rescale};
pub use pipeline::{FixedFrame, FrameFixer, needed_fixes};
pub use trim::{BoundingBox, content_bounding_box, trim_borders};

/// Result of a post-rescale stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    /// The stage produced a new image.
    Corrected(RgbImage),
    /// The stage had nothing to do, or gave up; this is its input.
    Unchanged(RgbImage),
}

impl StageOutcome {
    pub fn is_corrected(&self) -> bool {
        matches!(self, Self::Corrected(_))
    }

    pub fn image(&self) -> &RgbImage {
        match self {
            Self::Corrected(image) | Self::Unchanged(image) => image,
        }
    }

    pub fn into_image(self) -> RgbImage {
        match self {
            Self::Corrected(image) | Self::Unchanged(image) => image,
        }
    }
}
