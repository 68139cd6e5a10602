//! FFprobe integration for display aspect ratio probing
//!
//! Runs ffprobe with JSON output and reads the first stream's
//! `display_aspect_ratio` field, reported by ffprobe as `W:H`.
//!
//! Only the stream fields the probe reads are modelled, so output from older
//! or newer ffprobe builds with a different set of disposition or format keys
//! still parses.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::FixConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::AspectRatioProber;
use crate::processing::aspect::DisplayAspectRatio;
use crate::util::run_command_with_timeout;

/// FFprobe stream with the fields the DAR probe needs
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FfprobeStream {
    #[serde(default)]
    pub index: i64,
    pub codec_type: Option<String>,
    pub display_aspect_ratio: Option<String>,
}

/// Root ffprobe response structure
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FfprobeResponse {
    #[serde(default)]
    pub streams: Vec<FfprobeStream>,
}

/// Primary DAR probe backed by the ffprobe command-line tool.
#[derive(Debug, Clone)]
pub struct FfprobeDarProber {
    bin: PathBuf,
    timeout: Duration,
}

impl FfprobeDarProber {
    pub fn new(bin: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            bin: bin.into(),
            timeout,
        }
    }

    pub fn from_config(config: &FixConfig) -> Self {
        Self::new(config.ffprobe_bin.clone(), config.probe_timeout)
    }

    fn command(&self, input_path: &Path) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.args([
            "-v",
            "quiet",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(input_path);
        cmd
    }
}

impl AspectRatioProber for FfprobeDarProber {
    fn name(&self) -> &'static str {
        "ffprobe"
    }

    fn probe(&self, input_path: &Path) -> CoreResult<DisplayAspectRatio> {
        log::debug!(
            "Running ffprobe for display aspect ratio on: {}",
            input_path.display()
        );
        let output = run_command_with_timeout(&mut self.command(input_path), self.timeout)?;
        parse_ffprobe_output(&output.stdout)
    }
}

/// Parses ffprobe's JSON output and extracts the first stream's DAR.
pub fn parse_ffprobe_output(stdout: &[u8]) -> CoreResult<DisplayAspectRatio> {
    let metadata: FfprobeResponse = serde_json::from_slice(stdout).map_err(|e| {
        CoreError::JsonParseError(format!("ffprobe output deserialization: {e}"))
    })?;
    dar_from_metadata(&metadata)
}

/// Reads `streams[0].display_aspect_ratio` from probed metadata.
pub fn dar_from_metadata(metadata: &FfprobeResponse) -> CoreResult<DisplayAspectRatio> {
    let stream = metadata.streams.first().ok_or_else(|| {
        CoreError::AspectRatioParse("ffprobe reported no streams".to_string())
    })?;

    let dar = stream.display_aspect_ratio.as_deref().ok_or_else(|| {
        CoreError::AspectRatioParse(format!(
            "stream {} has no display_aspect_ratio",
            stream.index
        ))
    })?;

    DisplayAspectRatio::parse_colon(dar)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata_with(dars: &[Option<&str>]) -> FfprobeResponse {
        let streams = dars
            .iter()
            .enumerate()
            .map(|(i, dar)| FfprobeStream {
                index: i as i64,
                codec_type: Some("video".to_string()),
                display_aspect_ratio: dar.map(str::to_string),
            })
            .collect();
        FfprobeResponse { streams }
    }

    #[test]
    fn test_parses_output_missing_newer_keys() {
        // No `timed_thumbnails` disposition, no format `size` or `probe_score`.
        let stdout = br#"{
            "streams": [{
                "index": 0, "codec_name": "h264", "codec_type": "video",
                "width": 1440, "height": 1080,
                "sample_aspect_ratio": "4:3", "display_aspect_ratio": "16:9",
                "disposition": {"default": 1, "dub": 0}
            }],
            "format": {"filename": "movie.mkv", "nb_streams": 1}
        }"#;
        let dar = parse_ffprobe_output(stdout).unwrap();
        assert!((dar.value() - 16.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_reads_first_stream() {
        let metadata = metadata_with(&[Some("16:9"), Some("4:3")]);
        let dar = dar_from_metadata(&metadata).unwrap();
        assert!((dar.value() - 16.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_field_is_error() {
        let metadata = metadata_with(&[None, Some("4:3")]);
        assert!(matches!(
            dar_from_metadata(&metadata),
            Err(CoreError::AspectRatioParse(_))
        ));
    }

    #[test]
    fn test_no_streams_is_error() {
        assert!(dar_from_metadata(&metadata_with(&[])).is_err());
    }

    #[test]
    fn test_unknown_ratio_placeholder_is_error() {
        assert!(dar_from_metadata(&metadata_with(&[Some("0:1")])).is_err());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            parse_ffprobe_output(b"{\"streams\": [oops"),
            Err(CoreError::JsonParseError(_))
        ));
        assert!(parse_ffprobe_output(b"").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_tool_is_error() {
        let prober = FfprobeDarProber::new("false", Duration::from_secs(5));
        assert!(matches!(
            prober.probe(Path::new("movie.mkv")),
            Err(CoreError::CommandFailed(..))
        ));
    }

    #[test]
    fn test_missing_tool_is_dependency_error() {
        let prober = FfprobeDarProber::new("framefix-no-such-ffprobe", Duration::from_secs(5));
        assert!(matches!(
            prober.probe(Path::new("movie.mkv")),
            Err(CoreError::DependencyNotFound(_))
        ));
    }
}
