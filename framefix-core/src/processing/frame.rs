//! Decoded frame buffers and aspect-ratio rescaling.
//!
//! A [`RawFrame`] is laid out as (height, width, channel): rows first, then
//! columns, then three interleaved 8-bit channels. Rescaling always keeps the
//! row count and stretches or squeezes the columns, which is how anamorphic
//! encodings are undone.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, RgbImage};
use log::{debug, info};

use crate::error::{CoreError, CoreResult};
use crate::processing::aspect::DisplayAspectRatio;

/// Channel order of a decoded buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Blue, green, red. What most video decoders hand back.
    Bgr,
    Rgb,
}

/// A decoded video frame as produced by an external decoder.
#[derive(Debug, Clone)]
pub struct RawFrame {
    height: u32,
    width: u32,
    order: ChannelOrder,
    data: Vec<u8>,
}

impl RawFrame {
    /// Wraps an interleaved three-channel buffer of `height` rows by `width` columns.
    pub fn new(height: u32, width: u32, order: ChannelOrder, data: Vec<u8>) -> CoreResult<Self> {
        if height == 0 || width == 0 {
            return Err(CoreError::InvalidFrame(format!(
                "frame must have positive dimensions, got {height}x{width} (rows x cols)"
            )));
        }

        let expected = height as usize * width as usize * 3;
        if data.len() != expected {
            return Err(CoreError::InvalidFrame(format!(
                "buffer holds {} bytes but {}x{}x3 needs {}",
                data.len(),
                height,
                width,
                expected
            )));
        }

        Ok(Self {
            height,
            width,
            order,
            data,
        })
    }

    /// Builds a frame from an already-decoded RGB image.
    pub fn from_rgb_image(image: RgbImage) -> CoreResult<Self> {
        let (width, height) = image.dimensions();
        Self::new(height, width, ChannelOrder::Rgb, image.into_raw())
    }

    /// Stored (height, width, channels), in buffer axis order.
    pub fn shape(&self) -> (u32, u32, u32) {
        (self.height, self.width, 3)
    }

    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Consumes the frame and returns an RGB image of the same size.
    pub fn into_rgb_image(self) -> CoreResult<RgbImage> {
        let Self {
            height,
            width,
            order,
            mut data,
        } = self;

        if order == ChannelOrder::Bgr {
            for px in data.chunks_exact_mut(3) {
                px.swap(0, 2);
            }
        }

        ImageBuffer::from_raw(width, height, data).ok_or_else(|| {
            CoreError::InvalidFrame("buffer does not match its dimensions".to_string())
        })
    }
}

/// Width the frame must have for its stored height to render at `dar`.
///
/// Computed as `width * (dar / (width / height))` and rounded, never below one
/// column.
pub fn corrected_width(height: u32, width: u32, dar: DisplayAspectRatio) -> u32 {
    let stored_ratio = f64::from(width) / f64::from(height);
    let scale_factor = dar.value() / stored_ratio;
    let corrected = (f64::from(width) * scale_factor).round();
    corrected.clamp(1.0, f64::from(u32::MAX)) as u32
}

/// Resizes `frame` so it renders at `dar`, keeping its pixel height, and
/// converts it to RGB.
pub fn rescale(frame: RawFrame, dar: DisplayAspectRatio) -> CoreResult<RgbImage> {
    let (height, width, _) = frame.shape();
    info!("Original dimensions: {}x{}", width, height);

    let target_width = corrected_width(height, width, dar);
    info!("Fixed dimensions: {}x{}", target_width, height);

    let rgb = frame.into_rgb_image()?;
    if target_width == width {
        debug!("Stored ratio already matches DAR {}, skipping resize", dar);
        return Ok(rgb);
    }

    Ok(imageops::resize(&rgb, target_width, height, FilterType::Triangle))
}
