// src/config/model.rs

use serde::Deserialize;

use crate::config::prereqs::split_prerequisite_cell;
use crate::curriculum::Curriculum;
use crate::types::MissingPrerequisitePolicy;

/// Top-level plan file as read from TOML, before validation.
///
/// ```toml
/// [planner]
/// missing_prerequisites = "block"
///
/// [[subject]]
/// name = "Calculus I"
/// status = "done"
/// term = 1
///
/// [[subject]]
/// name = "Calculus II"
/// status = "future"
/// prerequisites = ["Calculus I"]
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawPlanFile {
    /// Engine behaviour from `[planner]`.
    #[serde(default)]
    pub planner: PlannerSection,

    /// One entry per `[[subject]]` table, in file order.
    #[serde(default)]
    pub subject: Vec<RawSubject>,
}

/// `[planner]` section.
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct PlannerSection {
    /// `"block"` (default) or `"assume_satisfied"`.
    #[serde(default)]
    pub missing_prerequisites: MissingPrerequisitePolicy,
}

/// `[[subject]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSubject {
    pub name: String,

    /// Status string; aliases are accepted (see [`SubjectStatus`](crate::types::SubjectStatus)).
    ///
    /// Kept as text here so validation can name the offending subject.
    pub status: String,

    /// Either a TOML array or a single joined cell such as `"A; B"`.
    #[serde(default)]
    pub prerequisites: PrerequisiteField,

    /// Ideal term, only used to group subjects for display.
    #[serde(default)]
    pub term: Option<u32>,
}

/// The two shapes a prerequisite column takes.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PrerequisiteField {
    List(Vec<String>),
    Joined(String),
}

impl Default for PrerequisiteField {
    fn default() -> Self {
        PrerequisiteField::List(Vec::new())
    }
}

impl PrerequisiteField {
    /// Flatten into individual names, trimmed, empties dropped.
    ///
    /// Array items are taken whole, so a subject named `"Algebra, Linear"`
    /// can be referenced; only the joined-string form is split.
    pub fn names(&self) -> Vec<String> {
        match self {
            PrerequisiteField::List(items) => items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
            PrerequisiteField::Joined(cell) => split_prerequisite_cell(cell),
        }
    }
}

/// A validated plan: settings plus the subject snapshot.
///
/// Only constructed through `TryFrom<RawPlanFile>` (see `validate.rs`).
#[derive(Debug, Clone)]
pub struct PlanFile {
    pub planner: PlannerSection,
    curriculum: Curriculum,
}

impl PlanFile {
    pub(crate) fn new_unchecked(planner: PlannerSection, curriculum: Curriculum) -> Self {
        Self {
            planner,
            curriculum,
        }
    }

    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    pub fn missing_prerequisites(&self) -> MissingPrerequisitePolicy {
        self.planner.missing_prerequisites
    }
}
