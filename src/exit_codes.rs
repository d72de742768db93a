//! Stable process exit codes.

/// The program ran to completion.
pub const OK: i32 = 0;
/// The program reported errors, or output could not be written.
pub const FAILED: i32 = 1;
