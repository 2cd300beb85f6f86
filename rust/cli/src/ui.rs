//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface output
//! across CLI commands, including error messages, warnings, titles and lists.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

pub fn write_title(out: &mut dyn Write, title: &str) -> std::io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))
}

/// Bulleted list, one item per line.
pub fn write_listing<S: AsRef<str>>(out: &mut dyn Write, items: &[S]) -> std::io::Result<()> {
    for item in items {
        writeln!(out, " * {}", item.as_ref())?;
    }
    writeln!(out)
}

pub fn write_block(out: &mut dyn Write, text: &str) -> std::io::Result<()> {
    writeln!(out, " {}", text)
}
