//! Stable exit codes for the module binary.

/// Module succeeded (changed or not).
pub const OK: i32 = 0;
/// Argument, read, or write failure. A failure document was printed.
pub const FAILED: i32 = 1;
