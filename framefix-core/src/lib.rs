//! Core library for correcting the presentation of frames extracted from
//! videos before they are published.
//!
//! The pipeline probes the video's display aspect ratio (ffprobe, falling back
//! to mediainfo), rescales the decoded frame to that ratio, trims uniform
//! borders, crops frames that are too wide for social feeds, and classifies
//! the result as color or monochrome.
//!
//! ## Usage Example
//!
//! ```rust
//! use framefix_core::{ChannelOrder, FixConfig, FrameFixer, RawFrame};
//! use framefix_core::external::mocks::StaticProber;
//! use std::path::Path;
//!
//! // A 1440x1080 anamorphic frame of a 16:9 movie, as BGR bytes.
//! let frame = RawFrame::new(1080, 1440, ChannelOrder::Bgr, vec![0; 1080 * 1440 * 3]).unwrap();
//!
//! let fixer = FrameFixer::new(StaticProber::new(16.0 / 9.0), FixConfig::default());
//! let fixed = fixer.needed_fixes(Path::new("movie.mkv"), frame, true).unwrap();
//!
//! assert_eq!(fixed.image.dimensions(), (1920, 1080));
//! assert_eq!(fixed.is_color, Some(false));
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod processing;
pub mod util;

// Re-exports for public API
pub use config::{FixConfig, FixConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use external::{AspectRatioProber, FallbackProber, SystemProber};
pub use processing::{
    ChannelOrder, ColorClassification, DisplayAspectRatio, FixedFrame, FrameFixer, RawFrame,
    StageOutcome, needed_fixes, saturation_score,
};
