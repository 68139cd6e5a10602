//! Implementation of the 'classify' subcommand.
//!
//! Lets callers that decide on palettes outside the pipeline use the same
//! classifier with their own threshold.

use anyhow::{Context, Result};

use framefix_core::ColorClassification;

use crate::cli::{ClassifyArgs, ProbeToolArgs};
use crate::commands::{build_config, existing_file};
use crate::output::print_info;

pub fn run_classify(args: ClassifyArgs) -> Result<()> {
    let image_path = existing_file(&args.image_path, "image")?;
    let config = build_config(Some(args.threshold.threshold), &ProbeToolArgs::default())?;

    let image = image::open(&image_path)
        .with_context(|| format!("Failed to load image '{}'", image_path.display()))?
        .to_rgb8();
    let class = ColorClassification::classify(&image, config.monochrome_threshold);

    print_info("Saturation score", format!("{:.2}", class.score));
    print_info("Threshold", format!("{:.2}", class.threshold));
    print_info(
        "Verdict",
        if class.is_color() { "color" } else { "monochrome" },
    );
    Ok(())
}
