// framefix-cli/src/lib.rs
//
// Library portion of the Framefix CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{ClassifyArgs, Cli, Commands, FixArgs, ProbeArgs, ProbeToolArgs};
pub use commands::classify::run_classify;
pub use commands::fix::run_fix;
pub use commands::probe::run_probe;
