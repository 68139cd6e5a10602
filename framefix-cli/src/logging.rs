// ============================================================================
// framefix-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger Setup for the CLI
//
// The core library logs through the `log` facade; this module installs the
// env_logger backend. RUST_LOG takes precedence when set, otherwise the level
// is `info`, or `debug` with --verbose. Log lines go to stderr so command
// results on stdout stay machine-readable.

use std::io::Write;

use log::{Level, LevelFilter};
use owo_colors::{OwoColorize, Stream};

/// Initializes the global logger.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder
        .format(|buf, record| {
            let level = match record.level() {
                Level::Error => "ERROR"
                    .if_supports_color(Stream::Stderr, |l| l.bright_red())
                    .to_string(),
                Level::Warn => "WARN "
                    .if_supports_color(Stream::Stderr, |l| l.yellow())
                    .to_string(),
                Level::Info => "INFO "
                    .if_supports_color(Stream::Stderr, |l| l.green())
                    .to_string(),
                Level::Debug => "DEBUG"
                    .if_supports_color(Stream::Stderr, |l| l.blue())
                    .to_string(),
                Level::Trace => "TRACE"
                    .if_supports_color(Stream::Stderr, |l| l.magenta())
                    .to_string(),
            };
            writeln!(buf, "{} {} {}", buf.timestamp(), level, record.args())
        })
        .init();

    log::debug!("Logger initialized with level: {}", level);
}
