//! Implementation of the 'fix' subcommand.
//!
//! Loads a frame decoded elsewhere, runs the frame-correction pipeline against
//! the video it came from and writes the corrected image.

use anyhow::{Context, Result};
use log::{debug, info};

use framefix_core::{FrameFixer, RawFrame};

use crate::cli::FixArgs;
use crate::commands::{build_config, existing_file};
use crate::output::{print_heading, print_info, yes_no};

pub fn run_fix(args: FixArgs) -> Result<()> {
    let video_path = existing_file(&args.video_path, "video")?;
    let frame_path = existing_file(&args.frame_path, "frame")?;
    let config = build_config(Some(args.threshold.threshold), &args.tools)?;
    debug!("Using configuration: {:?}", config);

    let decoded = image::open(&frame_path)
        .with_context(|| format!("Failed to load frame '{}'", frame_path.display()))?
        .to_rgb8();
    let frame = RawFrame::from_rgb_image(decoded)?;

    let fixer = FrameFixer::system(config);
    let fixed = fixer
        .needed_fixes(&video_path, frame, !args.no_palette_check)
        .with_context(|| format!("Failed to correct frame from '{}'", video_path.display()))?;

    if let Some(parent) = args.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create output directory '{}'", parent.display())
        })?;
    }
    fixed
        .image
        .save(&args.output_path)
        .with_context(|| format!("Failed to write '{}'", args.output_path.display()))?;
    info!("Saved corrected frame to {}", args.output_path.display());

    print_heading("Frame corrected");
    print_info("Display aspect ratio", fixed.dar);
    print_info(
        "Dimensions",
        format!("{}x{}", fixed.image.width(), fixed.image.height()),
    );
    print_info("Borders trimmed", yes_no(fixed.trimmed));
    print_info("Display cropped", yes_no(fixed.display_cropped));
    if let Some(is_color) = fixed.is_color {
        print_info("Needs palette", yes_no(is_color));
    }
    print_info("Output", args.output_path.display());

    Ok(())
}
