//! Request and outcome types shared by the library and the binary.

use std::path::PathBuf;

/// One convergence request: the desired state of a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Absolute path of the target file. Validated by the argument layer.
    pub path: PathBuf,
    /// Desired content, written verbatim. Empty is a valid desired state.
    pub content: String,
    /// Report what would change without writing.
    pub dry_run: bool,
}

/// Result of a successful convergence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub path: PathBuf,
    pub content: String,
    /// True iff the file was absent or differed at decision time.
    ///
    /// In dry-run mode this is what *would* have changed.
    pub changed: bool,
}

/// What was found at the target path before deciding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observed {
    Absent,
    Present(Vec<u8>),
}
