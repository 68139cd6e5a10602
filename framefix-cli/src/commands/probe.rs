//! Implementation of the 'probe' subcommand.

use anyhow::Result;

use framefix_core::FrameFixer;

use crate::cli::ProbeArgs;
use crate::commands::{build_config, existing_file};
use crate::output::print_info;

pub fn run_probe(args: ProbeArgs) -> Result<()> {
    let video_path = existing_file(&args.video_path, "video")?;
    let config = build_config(None, &args.tools)?;

    let dar = FrameFixer::system(config).probe(&video_path)?;
    print_info("Display aspect ratio", dar);
    Ok(())
}
