//! Result document written to stdout for the orchestration runtime.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::types::{Outcome, Request};

/// Success or failure document.
///
/// `file_path` mirrors `path`; playbooks written against the earlier module
/// read `result.file_path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleOutput {
    pub changed: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub failed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ModuleOutput {
    pub fn success(outcome: &Outcome) -> Self {
        let path = outcome.path.to_string_lossy().into_owned();
        Self {
            changed: outcome.changed,
            failed: false,
            msg: None,
            path: Some(path.clone()),
            file_path: Some(path),
            content: Some(outcome.content.clone()),
        }
    }

    /// Failure document carrying whatever of the request was known.
    pub fn failure(msg: impl Into<String>, request: Option<&Request>) -> Self {
        let path = request.map(|req| req.path.to_string_lossy().into_owned());
        Self {
            changed: false,
            failed: true,
            msg: Some(msg.into()),
            file_path: path.clone(),
            path,
            content: request.map(|req| req.content.clone()),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("serialize module output")
    }
}
