// ============================================================================
// framefix-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Display Aspect Ratio Probing
//
// This module encapsulates interactions with the media inspection tools used
// to learn a video's display aspect ratio. Probing sits behind the
// AspectRatioProber trait so the pipeline can be driven by fakes in tests and
// so the process-spawning implementations stay at the edge of the crate.
//
// KEY COMPONENTS:
// - AspectRatioProber: the probing capability
// - FfprobeDarProber: primary probe (ffprobe, stream metadata)
// - MediaInfoDarProber: fallback probe (mediainfo, slow)
// - FallbackProber / SystemProber: the two-tier gate
// - mocks: deterministic fakes

// ---- Internal crate imports ----
use crate::error::CoreResult;
use crate::processing::aspect::DisplayAspectRatio;

// ---- Standard library imports ----
use std::path::Path;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Primary probe built on ffprobe
pub mod ffprobe_executor;

/// Fallback probe built on mediainfo
pub mod mediainfo_executor;

/// Primary-then-fallback composition
pub mod fallback;

/// Fake probers for tests and downstream callers
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use fallback::{FallbackProber, SystemProber};
pub use ffprobe_executor::FfprobeDarProber;
pub use mediainfo_executor::MediaInfoDarProber;

// ============================================================================
// PROBING CAPABILITY
// ============================================================================

/// Determines the display aspect ratio of a video file.
///
/// Implementations must not keep per-call state that would make concurrent
/// probes of different files interfere.
///
/// # Examples
///
/// ```rust
/// use framefix_core::external::AspectRatioProber;
/// use framefix_core::external::mocks::StaticProber;
/// use std::path::Path;
///
/// let prober = StaticProber::new(2.39);
/// let dar = prober.probe(Path::new("/movies/scope.mkv")).unwrap();
/// assert_eq!(dar.value(), 2.39);
/// ```
pub trait AspectRatioProber {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Probes `input_path` for its display aspect ratio.
    fn probe(&self, input_path: &Path) -> CoreResult<DisplayAspectRatio>;
}

impl<T: AspectRatioProber + ?Sized> AspectRatioProber for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn probe(&self, input_path: &Path) -> CoreResult<DisplayAspectRatio> {
        (**self).probe(input_path)
    }
}

impl<T: AspectRatioProber + ?Sized> AspectRatioProber for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn probe(&self, input_path: &Path) -> CoreResult<DisplayAspectRatio> {
        (**self).probe(input_path)
    }
}
