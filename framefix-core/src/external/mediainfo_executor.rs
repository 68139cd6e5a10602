//! MediaInfo integration for display aspect ratio probing
//!
//! Used when ffprobe cannot answer. mediainfo parses the whole container and
//! is much slower on large files, so it only runs as a fallback.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::FixConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::AspectRatioProber;
use crate::processing::aspect::DisplayAspectRatio;
use crate::util::run_command_with_timeout;

/// Index of the track entry carrying the DAR. Entry 0 is the "General"
/// container summary, entry 1 the first elementary stream.
const DAR_TRACK_INDEX: usize = 1;

/// MediaInfo track with the fields the DAR probe needs
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct MediaInfoTrack {
    #[serde(rename = "@type")]
    pub track_type: String,
    #[serde(rename = "DisplayAspectRatio")]
    pub display_aspect_ratio: Option<String>,
}

/// MediaInfo media container
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct MediaInfoMedia {
    pub track: Vec<MediaInfoTrack>,
}

/// Root MediaInfo response structure
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct MediaInfoResponse {
    pub media: MediaInfoMedia,
}

/// Fallback DAR probe backed by the mediainfo command-line tool.
#[derive(Debug, Clone)]
pub struct MediaInfoDarProber {
    bin: PathBuf,
    timeout: Duration,
}

impl MediaInfoDarProber {
    pub fn new(bin: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            bin: bin.into(),
            timeout,
        }
    }

    pub fn from_config(config: &FixConfig) -> Self {
        Self::new(config.mediainfo_bin.clone(), config.probe_timeout)
    }
}

impl AspectRatioProber for MediaInfoDarProber {
    fn name(&self) -> &'static str {
        "mediainfo"
    }

    fn probe(&self, input_path: &Path) -> CoreResult<DisplayAspectRatio> {
        log::debug!(
            "Running mediainfo for display aspect ratio on: {}",
            input_path.display()
        );

        let mut cmd = Command::new(&self.bin);
        cmd.arg("--Output=JSON").arg(input_path);
        let output = run_command_with_timeout(&mut cmd, self.timeout)?;

        let response: MediaInfoResponse = serde_json::from_slice(&output.stdout).map_err(|e| {
            CoreError::JsonParseError(format!(
                "Failed to parse mediainfo JSON output for {}: {}",
                input_path.display(),
                e
            ))
        })?;
        dar_from_mediainfo(&response)
    }
}

/// Reads `media.track[1].DisplayAspectRatio` as a decimal ratio.
pub fn dar_from_mediainfo(response: &MediaInfoResponse) -> CoreResult<DisplayAspectRatio> {
    let track = response.media.track.get(DAR_TRACK_INDEX).ok_or_else(|| {
        CoreError::AspectRatioParse(format!(
            "mediainfo reported {} track(s), expected at least {}",
            response.media.track.len(),
            DAR_TRACK_INDEX + 1
        ))
    })?;

    let dar = track.display_aspect_ratio.as_deref().ok_or_else(|| {
        CoreError::AspectRatioParse(format!(
            "{} track has no DisplayAspectRatio",
            track.track_type
        ))
    })?;

    DisplayAspectRatio::parse_decimal(dar)
}
