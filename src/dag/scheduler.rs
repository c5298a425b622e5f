// src/dag/scheduler.rs

//! Simulated term-by-term enrollment plan.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::Serialize;
use tracing::{debug, warn};

use crate::curriculum::{Curriculum, Subject, SubjectName};
use crate::types::{MissingPrerequisitePolicy, SubjectStatus};

/// Result of [`simulate_schedule`].
///
/// A stalled schedule is not an error: the terms built so far are kept and
/// every subject that could never be unblocked is listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleReport {
    /// 1-based term index to the subjects taken in that term (name order).
    #[serde(rename = "schedule")]
    pub terms: BTreeMap<u32, Vec<SubjectName>>,
    /// Whether scheduling stopped with future subjects left over.
    pub stalled: bool,
    /// Future subjects that were never scheduled, in name order.
    pub unresolved: Vec<SubjectName>,
    /// For each unresolved subject, the prerequisites never satisfied.
    pub blockers: BTreeMap<SubjectName, Vec<SubjectName>>,
}

impl ScheduleReport {
    /// Number of terms in the schedule.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Term a subject was assigned to, if any.
    pub fn term_of(&self, name: &str) -> Option<u32> {
        self.terms
            .iter()
            .find(|(_, subjects)| subjects.iter().any(|s| s == name))
            .map(|(term, _)| *term)
    }

    /// True when every future subject got a term.
    pub fn is_complete(&self) -> bool {
        !self.stalled
    }

    pub fn scheduled_count(&self) -> usize {
        self.terms.values().map(Vec::len).sum()
    }
}

/// Simulate enrollment with the default [`MissingPrerequisitePolicy`].
pub fn simulate_schedule(curriculum: &Curriculum) -> ScheduleReport {
    simulate_schedule_with(curriculum, MissingPrerequisitePolicy::default())
}

/// Assign every future subject to the earliest term in which all of its
/// prerequisites are known.
///
/// The knowledge set starts with every done or in-progress subject. Each
/// round takes *all* currently unblocked subjects into the same term, since
/// a student can enroll in several unlocked subjects at once. When a round
/// unblocks nothing, the loop stops and the leftovers are reported.
pub fn simulate_schedule_with(
    curriculum: &Curriculum,
    policy: MissingPrerequisitePolicy,
) -> ScheduleReport {
    let mut known: HashSet<&str> = curriculum
        .iter()
        .filter(|s| s.status() != SubjectStatus::Future)
        .map(Subject::name)
        .collect();

    let mut remaining: BTreeSet<&str> = curriculum
        .with_status(SubjectStatus::Future)
        .map(Subject::name)
        .collect();

    let is_satisfied = |known: &HashSet<&str>, prereq: &str| {
        known.contains(prereq)
            || (policy == MissingPrerequisitePolicy::AssumeSatisfied
                && !curriculum.contains(prereq))
    };

    let mut report = ScheduleReport::default();
    let mut term: u32 = 1;

    while !remaining.is_empty() {
        let ready: Vec<&str> = remaining
            .iter()
            .copied()
            .filter(|name| {
                curriculum.get(name).is_some_and(|subject| {
                    subject
                        .prerequisites()
                        .iter()
                        .all(|p| is_satisfied(&known, p))
                })
            })
            .collect();

        if ready.is_empty() {
            report.stalled = true;
            break;
        }

        debug!(term, subjects = ?ready, "assigned term");
        for &name in &ready {
            remaining.remove(name);
            known.insert(name);
        }
        report
            .terms
            .insert(term, ready.iter().map(|s| s.to_string()).collect());
        term += 1;
    }

    for name in remaining {
        let missing: Vec<SubjectName> = curriculum
            .get(name)
            .map(|subject| {
                subject
                    .prerequisites()
                    .iter()
                    .filter(|p| !is_satisfied(&known, p))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        report.unresolved.push(name.to_string());
        report.blockers.insert(name.to_string(), missing);
    }

    if report.stalled {
        warn!(
            unresolved = ?report.unresolved,
            "schedule stalled; some subjects can never be unblocked"
        );
    }

    report
}
