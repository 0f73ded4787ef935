//! Test-only helpers: a temp directory holding target files and args documents.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

use crate::core::types::Request;

/// Temporary root for convergence targets. Removed on drop.
pub struct ModuleFixture {
    dir: TempDir,
}

impl ModuleFixture {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `name` under the fixture root.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `content` to `name` and return its path.
    pub fn seed(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path(name);
        fs::write(&path, content).with_context(|| format!("seed {}", path.display()))?;
        Ok(path)
    }

    pub fn request(&self, name: &str, content: &str, dry_run: bool) -> Request {
        Request {
            path: self.path(name),
            content: content.to_string(),
            dry_run,
        }
    }

    /// Write an argument document the way the runtime does and return its path.
    pub fn write_args(&self, args: &Value) -> Result<PathBuf> {
        let path = self.path("args.json");
        let payload = serde_json::to_string(args).context("serialize args")?;
        fs::write(&path, payload).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}
