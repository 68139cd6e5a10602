//! Terminal presentation helpers for command results.
//!
//! Styling is only applied when stdout is a color-capable terminal.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};

/// Print a heading with colored styling and clear separation
pub fn print_heading(text: &str) {
    let line = "=".repeat(50);
    let line = line.if_supports_color(Stream::Stdout, |l| l.bright_blue());
    println!("{}", line);
    println!(" {}", text.if_supports_color(Stream::Stdout, |t| t.bold()));
    println!("{}", line);
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!(
        "{}: {}",
        label.if_supports_color(Stream::Stdout, |l| l.bright_cyan()),
        value
    );
}

/// Renders a yes/no flag.
pub fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
