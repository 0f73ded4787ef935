//! I/O helpers for the module boundary and the target file.

pub mod args;
pub mod target;
