//! Pure convergence logic. No I/O.

pub mod plan;
pub mod types;
