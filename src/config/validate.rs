// src/config/validate.rs

use tracing::warn;

use crate::config::model::{PlanFile, RawPlanFile, RawSubject};
use crate::curriculum::{Curriculum, Subject};
use crate::errors::{PlanError, Result};
use crate::types::SubjectStatus;

impl TryFrom<RawPlanFile> for PlanFile {
    type Error = PlanError;

    fn try_from(raw: RawPlanFile) -> std::result::Result<Self, Self::Error> {
        ensure_has_subjects(&raw)?;

        let subjects = raw
            .subject
            .iter()
            .map(build_subject)
            .collect::<Result<Vec<_>>>()?;
        let curriculum = Curriculum::new(subjects)?;

        for dangling in curriculum.dangling_references() {
            warn!(
                subject = %dangling.subject,
                prerequisite = %dangling.prerequisite,
                policy = ?raw.planner.missing_prerequisites,
                "prerequisite names no subject in the plan"
            );
        }

        Ok(PlanFile::new_unchecked(raw.planner, curriculum))
    }
}

fn ensure_has_subjects(raw: &RawPlanFile) -> Result<()> {
    if raw.subject.is_empty() {
        return Err(PlanError::ConfigError(
            "plan must contain at least one [[subject]] entry".to_string(),
        ));
    }
    Ok(())
}

fn build_subject(raw: &RawSubject) -> Result<Subject> {
    let status: SubjectStatus = raw.status.parse().map_err(|e| {
        PlanError::ConfigError(format!("subject '{}': {e}", raw.name.trim()))
    })?;
    let subject = Subject::new(raw.name.as_str(), status, raw.prerequisites.names())?;
    match raw.term {
        Some(0) => Err(PlanError::ConfigError(format!(
            "subject '{}' has term = 0 (terms are 1-based)",
            subject.name()
        ))),
        Some(term) => Ok(subject.with_term_hint(term)),
        None => Ok(subject),
    }
}
