//! Module argument document: read, schema-check, and validate.
//!
//! The orchestration runtime hands binary modules a JSON object holding the
//! user parameters plus runtime-internal `_ansible_*` keys. Only
//! `_ansible_check_mode` is interpreted here.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::validator_for;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::types::Request;

const ARGS_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/module_args/v1.schema.json"
));

/// Name the runtime knows this module by.
pub const MODULE_NAME: &str = "create_file";

const SUPPORTED_PARAMS: [&str; 2] = ["content", "path"];
const INTERNAL_PREFIX: &str = "_ansible_";
/// Key wrapping the parameters when they arrive in the stdin envelope form.
const ENVELOPE_KEY: &str = "ANSIBLE_MODULE_ARGS";

/// Where the argument document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsSource {
    /// Path to an args file, as passed by the runtime on the command line.
    File(PathBuf),
    Stdin,
}

/// Validated module parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModuleArgs {
    pub path: PathBuf,
    pub content: String,
    #[serde(rename = "_ansible_check_mode", default)]
    pub check_mode: bool,
}

impl ModuleArgs {
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            bail!("path must not be empty");
        }
        if !self.path.is_absolute() {
            bail!("path must be absolute: {}", self.path.display());
        }
        Ok(())
    }

    /// Build the convergence request. `force_check` ORs into check mode.
    pub fn into_request(self, force_check: bool) -> Request {
        Request {
            dry_run: self.check_mode || force_check,
            path: self.path,
            content: self.content,
        }
    }
}

/// Read the raw argument document from `source`.
pub fn read_args_document(source: &ArgsSource) -> Result<String> {
    match source {
        ArgsSource::File(path) => {
            fs::read_to_string(path).with_context(|| format!("read args file {}", path.display()))
        }
        ArgsSource::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("read module arguments from stdin")?;
            Ok(buf)
        }
    }
}

/// Load and validate module arguments from `source`.
pub fn load_args(source: &ArgsSource) -> Result<ModuleArgs> {
    let raw = read_args_document(source)?;
    parse_args(&raw)
}

/// Parse and validate an argument document: supported keys, schema, then
/// semantic checks on `path`.
pub fn parse_args(raw: &str) -> Result<ModuleArgs> {
    let mut value: Value = serde_json::from_str(raw).context("parse module arguments as JSON")?;
    if let Some(inner) = value.get_mut(ENVELOPE_KEY).map(Value::take) {
        value = inner;
    }
    let object = value
        .as_object()
        .ok_or_else(|| anyhow!("module arguments must be a JSON object"))?;
    reject_unsupported(object)?;
    reject_missing(object)?;
    validate_schema(&value)?;

    let args: ModuleArgs =
        serde_json::from_value(value).context("deserialize module arguments")?;
    args.validate()?;
    debug!(path = %args.path.display(), check_mode = args.check_mode, "module arguments loaded");
    Ok(args)
}

fn reject_unsupported(object: &Map<String, Value>) -> Result<()> {
    let unsupported: Vec<&str> = object
        .keys()
        .map(String::as_str)
        .filter(|key| !key.starts_with(INTERNAL_PREFIX) && !SUPPORTED_PARAMS.contains(key))
        .collect();
    if !unsupported.is_empty() {
        bail!(
            "Unsupported parameters for ({MODULE_NAME}) module: {}. Supported parameters include: {}.",
            unsupported.join(", "),
            SUPPORTED_PARAMS.join(", ")
        );
    }
    Ok(())
}

fn reject_missing(object: &Map<String, Value>) -> Result<()> {
    let missing: Vec<&str> = SUPPORTED_PARAMS
        .iter()
        .copied()
        .filter(|key| !object.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        bail!("missing required arguments: {}", missing.join(", "));
    }
    Ok(())
}

fn validate_schema(args: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(ARGS_SCHEMA).context("parse args schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid args schema: {}", err))?;
    let messages = compiled
        .iter_errors(args)
        .map(|err| err.to_string())
        .collect::<Vec<_>>();
    if !messages.is_empty() {
        bail!("invalid module arguments: {}", messages.join("; "));
    }
    Ok(())
}
