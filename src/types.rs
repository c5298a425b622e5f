// src/types.rs

//! Small enums shared between the plan file, the engine and the CLI.

use std::str::FromStr;

use serde::Deserialize;

/// Enrollment status of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SubjectStatus {
    Done,
    InProgress,
    Future,
}

impl SubjectStatus {
    /// Anything not yet completed still belongs to the remaining plan.
    pub fn is_pending(self) -> bool {
        !matches!(self, SubjectStatus::Done)
    }
}

impl FromStr for SubjectStatus {
    type Err = String;

    /// Accepts the canonical names plus the spellings found in exported
    /// spreadsheet columns (English and Portuguese).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "done" | "completed" | "complete" | "passed" | "concluida" | "concluída" => {
                Ok(SubjectStatus::Done)
            }
            "in_progress" | "in-progress" | "in progress" | "ongoing" | "enrolled"
            | "cursando" => Ok(SubjectStatus::InProgress),
            "future" | "planned" | "pending" | "todo" | "a cursar" | "futura" => {
                Ok(SubjectStatus::Future)
            }
            other => Err(format!(
                "invalid subject status: {other:?} (expected \"done\", \"in_progress\" or \"future\")"
            )),
        }
    }
}

/// What the scheduler does with a prerequisite that names no known subject.
///
/// - `Block`: the prerequisite can never be satisfied, so its dependent ends
///   up unresolved (default).
/// - `AssumeSatisfied`: anything not modelled in the plan is taken as
///   already completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingPrerequisitePolicy {
    #[default]
    Block,
    AssumeSatisfied,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
