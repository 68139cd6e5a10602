//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use framefix_core::{FixConfig, FixConfigBuilder};

use crate::cli::ProbeToolArgs;

/// Module containing the implementation of the `classify` command.
pub mod classify;

/// Module containing the implementation of the `fix` command.
/// This command runs the full frame-correction pipeline on one frame.
pub mod fix;

/// Module containing the implementation of the `probe` command.
pub mod probe;

/// Resolves `path` to an existing file, naming `what` in the error.
pub(crate) fn existing_file(path: &Path, what: &str) -> Result<PathBuf> {
    let resolved = path
        .canonicalize()
        .with_context(|| format!("Invalid {} path '{}'", what, path.display()))?;
    if !resolved.is_file() {
        anyhow::bail!("Invalid {} path '{}': not a file", what, path.display());
    }
    Ok(resolved)
}

/// Builds and validates the core configuration from command options.
pub(crate) fn build_config(threshold: Option<f64>, tools: &ProbeToolArgs) -> Result<FixConfig> {
    let mut builder = FixConfigBuilder::new();
    if let Some(threshold) = threshold {
        builder = builder.monochrome_threshold(threshold);
    }
    if let Some(secs) = tools.probe_timeout {
        builder = builder.probe_timeout(Duration::from_secs(secs));
    }
    if let Some(bin) = &tools.ffprobe_bin {
        builder = builder.ffprobe_bin(bin);
    }
    if let Some(bin) = &tools.mediainfo_bin {
        builder = builder.mediainfo_bin(bin);
    }

    let config = builder.build();
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
