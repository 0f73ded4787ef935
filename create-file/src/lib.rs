//! Idempotent file-content convergence.
//!
//! Given an absolute path and desired text, make sure the file holds exactly
//! that text, reporting whether anything changed. Check mode reports what
//! would change without writing.
//!
//! - **[`core`]**: pure decision logic (observed state to planned action).
//! - **[`io`]**: argument documents and the target file.
//!
//! [`converge`] ties the two together; [`module`] wraps it in the
//! orchestration runtime's JSON-in, JSON-out contract.

pub mod converge;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod module;
pub mod output;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
