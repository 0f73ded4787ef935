//! Observe and rewrite the target file.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use tracing::debug;

use crate::core::types::Observed;

/// Read the current state of `path`.
///
/// A missing file is [`Observed::Absent`], not an error. Anything else that
/// stops the read (permissions, a directory at `path`) is returned as-is.
pub fn observe(path: &Path) -> io::Result<Observed> {
    match fs::read(path) {
        Ok(bytes) => {
            debug!(path = %path.display(), len = bytes.len(), "target present");
            Ok(Observed::Present(bytes))
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "target absent");
            Ok(Observed::Absent)
        }
        Err(err) => Err(err),
    }
}

/// Replace the whole file with `content` (truncate, then write).
///
/// Parent directories are not created.
pub fn write_content(path: &Path, content: &str) -> io::Result<()> {
    fs::write(path, content)?;
    debug!(path = %path.display(), len = content.len(), "target written");
    Ok(())
}
