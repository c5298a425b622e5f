// src/report/check.rs

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::curriculum::{Curriculum, DanglingReference, SubjectName};
use crate::dag::{find_cycles, simulate_schedule_with};
use crate::types::MissingPrerequisitePolicy;

/// Everything that makes a plan unplannable, plus softer warnings.
///
/// Cycles and stalls are errors; dangling references are warnings (under
/// [`MissingPrerequisitePolicy::Block`] they also surface as a stall).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub cycles: Vec<Vec<SubjectName>>,
    pub dangling: Vec<DanglingReference>,
    pub stalled: bool,
    pub unresolved: Vec<SubjectName>,
    pub blockers: BTreeMap<SubjectName, Vec<SubjectName>>,
}

impl CheckReport {
    pub fn from_curriculum(curriculum: &Curriculum, policy: MissingPrerequisitePolicy) -> Self {
        let schedule = simulate_schedule_with(curriculum, policy);
        let report = Self {
            cycles: find_cycles(curriculum),
            dangling: curriculum.dangling_references(),
            stalled: schedule.stalled,
            unresolved: schedule.unresolved,
            blockers: schedule.blockers,
        };
        debug!(
            cycles = report.cycles.len(),
            dangling = report.dangling.len(),
            stalled = report.stalled,
            "plan check finished"
        );
        report
    }

    pub fn has_errors(&self) -> bool {
        !self.cycles.is_empty() || self.stalled
    }

    pub fn warning_count(&self) -> usize {
        self.dangling.len()
    }

    /// One error per cycle plus one per unresolved subject outside every
    /// cycle, so cycle members are not counted twice.
    pub fn error_count(&self) -> usize {
        let outside_cycles = self
            .unresolved
            .iter()
            .filter(|name| !self.cycles.iter().any(|cycle| cycle.contains(*name)))
            .count();
        self.cycles.len() + outside_cycles
    }
}
