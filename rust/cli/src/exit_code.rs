//! Exit code constants for the CLI application.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code: bad arguments, unreadable input, invalid
/// configuration, or a replay that reported at least one malformed line.
pub const ERROR: i32 = 2;
