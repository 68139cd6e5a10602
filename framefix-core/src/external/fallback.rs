//! Two-tier display aspect ratio probing.

use std::path::Path;

use log::{error, info};

use crate::config::FixConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::{AspectRatioProber, FfprobeDarProber, MediaInfoDarProber};
use crate::processing::aspect::DisplayAspectRatio;

/// Tries `primary`, and on any failure asks `secondary` once.
///
/// There is no third tier: when both fail the result is
/// [`CoreError::ProbeFailure`] carrying both reasons.
#[derive(Debug, Clone)]
pub struct FallbackProber<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> FallbackProber<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn secondary(&self) -> &S {
        &self.secondary
    }
}

impl<P: AspectRatioProber, S: AspectRatioProber> AspectRatioProber for FallbackProber<P, S> {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn probe(&self, input_path: &Path) -> CoreResult<DisplayAspectRatio> {
        info!("Using {}", self.primary.name());
        let primary_err = match self.primary.probe(input_path) {
            Ok(dar) => return Ok(dar),
            Err(e) => e,
        };
        error!(
            "{} could not determine DAR for {}: {}",
            self.primary.name(),
            input_path.display(),
            primary_err
        );

        info!("Using {}. This will take a while", self.secondary.name());
        self.secondary.probe(input_path).map_err(|fallback_err| {
            error!(
                "{} could not determine DAR for {}: {}",
                self.secondary.name(),
                input_path.display(),
                fallback_err
            );
            CoreError::ProbeFailure {
                path: input_path.display().to_string(),
                primary: primary_err.to_string(),
                fallback: fallback_err.to_string(),
            }
        })
    }
}

/// The production prober: ffprobe first, mediainfo as fallback.
pub type SystemProber = FallbackProber<FfprobeDarProber, MediaInfoDarProber>;

impl SystemProber {
    pub fn from_config(config: &FixConfig) -> Self {
        FallbackProber::new(
            FfprobeDarProber::from_config(config),
            MediaInfoDarProber::from_config(config),
        )
    }
}

impl Default for SystemProber {
    fn default() -> Self {
        Self::from_config(&FixConfig::default())
    }
}
