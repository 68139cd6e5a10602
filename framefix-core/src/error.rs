// ============================================================================
// framefix-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the Frame-Correction Pipeline
//
// This module defines the error type shared by every part of the core library.
// Only probe failures are expected to reach callers of the pipeline; crop and
// trim problems are absorbed by their stages and reported as unchanged output.
//
// KEY COMPONENTS:
// - CoreError: the error enum
// - CoreResult: result alias used throughout the crate
// - Helper constructors for external command failures

// ---- Standard library imports ----
use std::io;
use std::process::ExitStatus;
use std::time::Duration;

// ---- External crate imports ----
use thiserror::Error;

/// Custom error types for framefix-core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Command '{0}' failed with status {1}: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("Command '{0}' timed out after {1:?}")]
    CommandTimeout(String, Duration),

    #[error("Required dependency '{0}' not found")]
    DependencyNotFound(String),

    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("Invalid display aspect ratio: {0}")]
    AspectRatioParse(String),

    #[error(
        "Could not determine display aspect ratio for {path}: primary probe failed ({primary}); fallback probe failed ({fallback})"
    )]
    ProbeFailure {
        path: String,
        primary: String,
        fallback: String,
    },

    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    #[error("Crop failed: {0}")]
    Crop(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for framefix-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Builds the error for a command that could not be spawned.
///
/// A missing executable is reported as [`CoreError::DependencyNotFound`] so
/// callers can tell "tool not installed" apart from other spawn problems.
pub fn command_start_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    let cmd = cmd.into();
    if err.kind() == io::ErrorKind::NotFound {
        CoreError::DependencyNotFound(cmd)
    } else {
        CoreError::CommandStart(cmd, err)
    }
}

/// Builds the error for a command that ran but exited unsuccessfully.
pub fn command_failed_error(
    cmd: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(cmd.into(), status, stderr.into())
}
