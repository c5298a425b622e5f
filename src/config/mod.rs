// src/config/mod.rs

//! Plan file loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Split spreadsheet-style prerequisite cells (`prereqs.rs`).
//! - Load a plan file from disk (`loader.rs`).
//! - Validate it into a typed [`PlanFile`] (`validate.rs`).

pub mod loader;
pub mod model;
pub mod prereqs;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, parse_plan_str, DEFAULT_PLAN_FILE};
pub use model::{PlanFile, PlannerSection, PrerequisiteField, RawPlanFile, RawSubject};
pub use prereqs::split_prerequisite_cell;
