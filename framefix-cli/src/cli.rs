// framefix-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use framefix_core::config::DEFAULT_MONOCHROME_THRESHOLD;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Framefix: correct extracted movie frames for publishing",
    long_about = "Rescales anamorphic frames to their display aspect ratio, trims \
                  letterbox borders, crops frames too wide for social feeds and \
                  reports whether the result needs a color palette."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Correct a decoded frame and write the result
    Fix(FixArgs),
    /// Print the display aspect ratio of a video
    Probe(ProbeArgs),
    /// Print the saturation score of an image and its color verdict
    Classify(ClassifyArgs),
}

/// Saturation threshold shared by the commands that classify.
#[derive(Args, Debug, Clone, Copy)]
pub struct ThresholdArgs {
    /// Mean saturation (0-255) separating monochrome from color
    #[arg(
        long,
        value_name = "SCORE",
        env = "FRAMEFIX_MONOCHROME_THRESHOLD",
        default_value_t = DEFAULT_MONOCHROME_THRESHOLD
    )]
    pub threshold: f64,
}

/// External probing tools and how long to wait for them.
#[derive(Args, Debug, Clone, Default)]
pub struct ProbeToolArgs {
    /// ffprobe executable (defaults to `ffprobe` on PATH)
    #[arg(long, value_name = "PATH", env = "FRAMEFIX_FFPROBE_BIN")]
    pub ffprobe_bin: Option<PathBuf>,

    /// mediainfo executable used when ffprobe fails (defaults to `mediainfo` on PATH)
    #[arg(long, value_name = "PATH", env = "FRAMEFIX_MEDIAINFO_BIN")]
    pub mediainfo_bin: Option<PathBuf>,

    /// Seconds to wait for ffprobe or mediainfo before giving up
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub probe_timeout: Option<u64>,
}

#[derive(Args, Debug)]
pub struct FixArgs {
    /// Video the frame was taken from
    #[arg(short = 'v', long = "video", required = true, value_name = "VIDEO_PATH")]
    pub video_path: PathBuf,

    /// Decoded frame image (PNG or JPEG)
    #[arg(short = 'f', long = "frame", required = true, value_name = "FRAME_PATH")]
    pub frame_path: PathBuf,

    /// Where to write the corrected image
    #[arg(short = 'o', long = "output", required = true, value_name = "OUTPUT_PATH")]
    pub output_path: PathBuf,

    /// Skip the final color/monochrome check
    #[arg(long, default_value_t = false)]
    pub no_palette_check: bool,

    #[command(flatten)]
    pub threshold: ThresholdArgs,

    #[command(flatten)]
    pub tools: ProbeToolArgs,
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Video to inspect
    #[arg(short = 'v', long = "video", required = true, value_name = "VIDEO_PATH")]
    pub video_path: PathBuf,

    #[command(flatten)]
    pub tools: ProbeToolArgs,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Image to classify
    #[arg(short = 'i', long = "image", required = true, value_name = "IMAGE_PATH")]
    pub image_path: PathBuf,

    #[command(flatten)]
    pub threshold: ThresholdArgs,
}
