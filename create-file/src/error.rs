//! Errors raised while converging a target file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Terminal failure of one convergence. Neither variant is retried.
#[derive(Debug, Error)]
pub enum ConvergeError {
    /// The path exists but could not be read.
    #[error("Failed to read existing file for comparison: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing the desired content failed. No rollback is attempted.
    #[error("Failed to create/write file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvergeError {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}
