// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{PlanFile, RawPlanFile};
use crate::errors::Result;

/// Load a plan file from a given path and return the raw `RawPlanFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (duplicate names, self references). Use [`load_and_validate`]
/// for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawPlanFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    debug!(?path, bytes = contents.len(), "read plan file");

    let raw: RawPlanFile = toml::from_str(&contents)?;

    Ok(raw)
}

/// Load a plan file from path and validate it into a [`PlanFile`].
///
/// This is the entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Builds typed subjects, rejecting:
///   - empty or duplicate names,
///   - self-referencing prerequisites,
///   - plans without any subject.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<PlanFile> {
    let raw = load_from_path(&path)?;
    PlanFile::try_from(raw)
}

/// Parse and validate plan text that did not come from a file.
pub fn parse_plan_str(contents: &str) -> Result<PlanFile> {
    let raw: RawPlanFile = toml::from_str(contents)?;
    PlanFile::try_from(raw)
}

/// Plan file looked up in the current working directory when `--plan` is
/// not given.
pub const DEFAULT_PLAN_FILE: &str = "Curriplan.toml";
