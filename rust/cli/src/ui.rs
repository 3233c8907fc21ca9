//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Error message tied to a 1-based input line.
pub fn write_line_error(err: &mut dyn Write, line_no: usize, msg: &str) -> std::io::Result<()> {
    write_error(err, &format!("line {}: {}", line_no, msg))
}
