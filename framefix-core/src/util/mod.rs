//! Utility functions and helpers module
//!
//! Holds the command execution infrastructure shared by the external probes.

pub mod command;

pub use command::{describe_command, run_command_with_timeout};
