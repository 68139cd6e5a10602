//! The `needed_fixes` pipeline: probe, rescale, trim, crop, classify.

use std::path::Path;

use image::RgbImage;
use log::info;

use crate::config::FixConfig;
use crate::error::CoreResult;
use crate::external::{AspectRatioProber, SystemProber};
use crate::processing::aspect::DisplayAspectRatio;
use crate::processing::color::ColorClassification;
use crate::processing::display_crop::limit_display_ratio;
use crate::processing::frame::{RawFrame, rescale};
use crate::processing::trim::trim_borders;

/// A corrected frame and what was done to it.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedFrame {
    pub image: RgbImage,
    pub dar: DisplayAspectRatio,
    pub trimmed: bool,
    pub display_cropped: bool,
    /// Set only when the caller asked for the palette check.
    pub is_color: Option<bool>,
}

/// Runs the frame-correction pipeline with a given prober and configuration.
///
/// Holds no mutable state, so one fixer can serve many threads when its
/// prober is `Sync`.
#[derive(Debug, Clone)]
pub struct FrameFixer<P> {
    prober: P,
    config: FixConfig,
}

impl FrameFixer<SystemProber> {
    /// A fixer using ffprobe/mediainfo as configured.
    pub fn system(config: FixConfig) -> Self {
        let prober = SystemProber::from_config(&config);
        Self::new(prober, config)
    }
}

impl<P: AspectRatioProber> FrameFixer<P> {
    pub fn new(prober: P, config: FixConfig) -> Self {
        Self { prober, config }
    }

    pub fn config(&self) -> &FixConfig {
        &self.config
    }

    pub fn prober(&self) -> &P {
        &self.prober
    }

    /// Probes the display aspect ratio of `video`.
    pub fn probe(&self, video: &Path) -> CoreResult<DisplayAspectRatio> {
        info!("Checking DAR");
        let dar = self.prober.probe(video)?;
        info!("Extracted display aspect ratio: {}", dar);
        Ok(dar)
    }

    /// Corrects `frame`, decoded from `video`, for publishing.
    ///
    /// Fails only when the display aspect ratio cannot be probed or the frame
    /// buffer is malformed. Trimming and display cropping fall back to their
    /// input. With `check_palette`, the result also says whether the final
    /// image is colorful enough to need a palette.
    pub fn needed_fixes(
        &self,
        video: &Path,
        frame: RawFrame,
        check_palette: bool,
    ) -> CoreResult<FixedFrame> {
        let dar = self.probe(video)?;
        let rescaled = rescale(frame, dar)?;

        let trimmed = trim_borders(rescaled, self.config.monochrome_threshold);
        let trimmed_applied = trimmed.is_corrected();

        let cropped = limit_display_ratio(trimmed.into_image(), &self.config.display_crop);
        let display_cropped = cropped.is_corrected();
        let image = cropped.into_image();

        let is_color = check_palette.then(|| {
            let class = ColorClassification::classify(&image, self.config.monochrome_threshold);
            info!(
                "Final saturation {:.2} (threshold {:.2}): {}",
                class.score,
                class.threshold,
                if class.is_color() { "color" } else { "monochrome" }
            );
            class.is_color()
        });

        Ok(FixedFrame {
            image,
            dar,
            trimmed: trimmed_applied,
            display_cropped,
            is_color,
        })
    }

    /// Classifies an image with the configured threshold.
    pub fn classify(&self, image: &RgbImage) -> ColorClassification {
        ColorClassification::classify(image, self.config.monochrome_threshold)
    }
}

/// Runs the pipeline with the system probes and default configuration.
pub fn needed_fixes(video: &Path, frame: RawFrame, check_palette: bool) -> CoreResult<FixedFrame> {
    FrameFixer::system(FixConfig::default()).needed_fixes(video, frame, check_palette)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::external::mocks::{FailingProber, StaticProber};
    use crate::processing::frame::ChannelOrder;

    fn bgr_frame(height: u32, width: u32, px: [u8; 3]) -> RawFrame {
        RawFrame::new(
            height,
            width,
            ChannelOrder::Bgr,
            px.repeat(height as usize * width as usize),
        )
        .unwrap()
    }

    #[test]
    fn test_probe_failure_aborts() {
        let fixer = FrameFixer::new(FailingProber::new("no tools"), FixConfig::default());
        let err = fixer
            .needed_fixes(Path::new("movie.mkv"), bgr_frame(4, 4, [0, 0, 0]), true)
            .unwrap_err();
        assert!(matches!(err, CoreError::AspectRatioParse(_)));
    }

    #[test]
    fn test_black_frame_passes_through_as_monochrome() {
        let fixer = FrameFixer::new(StaticProber::new(16.0 / 9.0), FixConfig::default());
        let fixed = fixer
            .needed_fixes(Path::new("movie.mkv"), bgr_frame(90, 160, [0, 0, 0]), true)
            .unwrap();

        assert_eq!(fixed.image.dimensions(), (160, 90));
        assert!(!fixed.trimmed);
        assert!(!fixed.display_cropped);
        assert_eq!(fixed.is_color, Some(false));
    }

    #[test]
    fn test_palette_check_is_optional() {
        let fixer = FrameFixer::new(StaticProber::new(16.0 / 9.0), FixConfig::default());
        let fixed = fixer
            .needed_fixes(Path::new("movie.mkv"), bgr_frame(9, 16, [255, 0, 0]), false)
            .unwrap();
        assert_eq!(fixed.is_color, None);
    }

    #[test]
    fn test_colorful_frame_needs_palette() {
        let fixer = FrameFixer::new(StaticProber::new(16.0 / 9.0), FixConfig::default());
        // BGR blue
        let fixed = fixer
            .needed_fixes(Path::new("movie.mkv"), bgr_frame(9, 16, [255, 0, 0]), true)
            .unwrap();
        assert_eq!(fixed.is_color, Some(true));
        assert_eq!(fixed.image.get_pixel(0, 0).0, [0, 0, 255]);
    }
}
