// src/curriculum/catalog.rs

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::curriculum::subject::{Subject, SubjectName};
use crate::errors::{PlanError, Result};
use crate::types::SubjectStatus;

/// A full, validated snapshot of subjects keyed by name.
///
/// Iteration is always in name order, which keeps every derived result
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Curriculum {
    subjects: BTreeMap<SubjectName, Subject>,
}

/// A prerequisite that names no subject in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct DanglingReference {
    pub subject: SubjectName,
    pub prerequisite: SubjectName,
}

impl Curriculum {
    /// Build a curriculum, rejecting duplicate subject names.
    pub fn new(subjects: impl IntoIterator<Item = Subject>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for subject in subjects {
            let name = subject.name().to_string();
            if map.insert(name.clone(), subject).is_some() {
                return Err(PlanError::DuplicateSubject(format!(
                    "subject '{name}' is defined more than once"
                )));
            }
        }
        debug!(subjects = map.len(), "curriculum built");
        Ok(Self { subjects: map })
    }

    pub fn get(&self, name: &str) -> Option<&Subject> {
        self.subjects.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.subjects.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// All subjects in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.values()
    }

    /// Subjects that are not yet done.
    pub fn pending(&self) -> impl Iterator<Item = &Subject> {
        self.iter().filter(|s| s.is_pending())
    }

    pub fn with_status(&self, status: SubjectStatus) -> impl Iterator<Item = &Subject> {
        self.iter().filter(move |s| s.status() == status)
    }

    /// Whether `name` refers to a subject that is still pending.
    pub fn is_pending(&self, name: &str) -> bool {
        self.get(name).is_some_and(|s| s.is_pending())
    }

    /// Every prerequisite reference that matches no subject, in name order.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        self.iter()
            .flat_map(|subject| {
                subject
                    .prerequisites()
                    .iter()
                    .filter(|p| !self.contains(p))
                    .map(|p| DanglingReference {
                        subject: subject.name().to_string(),
                        prerequisite: p.clone(),
                    })
            })
            .collect()
    }
}
