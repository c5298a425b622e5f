// src/curriculum/subject.rs

use std::collections::BTreeSet;

use crate::errors::{PlanError, Result};
use crate::types::SubjectStatus;

/// Canonical subject name type; the join key for prerequisites.
pub type SubjectName = String;

/// One academic course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    name: SubjectName,
    status: SubjectStatus,
    prerequisites: BTreeSet<SubjectName>,
    term_hint: Option<u32>,
}

impl Subject {
    /// Build a subject, trimming the name and every prerequisite.
    ///
    /// Fails with:
    /// - [`PlanError::InvalidSubject`] for an empty name or prerequisite,
    /// - [`PlanError::CyclicDependency`] when the subject lists itself.
    pub fn new<I, S>(name: impl Into<String>, status: SubjectStatus, prerequisites: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(PlanError::InvalidSubject(
                "subject name must not be empty".to_string(),
            ));
        }

        let mut prereqs = BTreeSet::new();
        for prereq in prerequisites {
            let prereq = prereq.into().trim().to_string();
            if prereq.is_empty() {
                return Err(PlanError::InvalidSubject(format!(
                    "subject '{name}' has an empty prerequisite name"
                )));
            }
            if prereq == name {
                return Err(PlanError::CyclicDependency {
                    cycle: vec![name.clone(), name],
                });
            }
            prereqs.insert(prereq);
        }

        Ok(Self {
            name,
            status,
            prerequisites: prereqs,
            term_hint: None,
        })
    }

    /// Attach the "ideal term" used for display grouping.
    pub fn with_term_hint(mut self, term: u32) -> Self {
        self.term_hint = Some(term);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> SubjectStatus {
        self.status
    }

    pub fn prerequisites(&self) -> &BTreeSet<SubjectName> {
        &self.prerequisites
    }

    pub fn term_hint(&self) -> Option<u32> {
        self.term_hint
    }

    pub fn is_done(&self) -> bool {
        self.status == SubjectStatus::Done
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }
}
