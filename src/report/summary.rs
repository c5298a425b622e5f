// src/report/summary.rs

use std::collections::BTreeMap;

use serde::Serialize;

use crate::curriculum::{Curriculum, Subject, SubjectName};
use crate::dag::compute_critical_path;
use crate::errors::Result;
use crate::types::{MissingPrerequisitePolicy, SubjectStatus};

/// Subjects sharing the same ideal term (`None` = no hint given).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermGroup {
    pub term: Option<u32>,
    pub subjects: Vec<SubjectName>,
}

/// Progress through the degree plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub total: usize,
    pub done: usize,
    pub in_progress: usize,
    pub future: usize,
    /// Share of subjects done, 0-100.
    pub percent_done: f64,
    /// Future subjects whose prerequisites are all done.
    pub available_now: Vec<SubjectName>,
    pub estimated_terms: usize,
    pub critical_path: Vec<SubjectName>,
    /// Hinted terms in ascending order, unhinted subjects last.
    pub by_term_hint: Vec<TermGroup>,
}

impl ProgressSummary {
    /// Fails only when the pending subjects contain a cycle.
    pub fn from_curriculum(
        curriculum: &Curriculum,
        policy: MissingPrerequisitePolicy,
    ) -> Result<Self> {
        let critical = compute_critical_path(curriculum)?;

        let count = |status| curriculum.with_status(status).count();
        let total = curriculum.len();
        let done = count(SubjectStatus::Done);
        let percent_done = if total == 0 {
            0.0
        } else {
            done as f64 * 100.0 / total as f64
        };

        let available_now = curriculum
            .with_status(SubjectStatus::Future)
            .filter(|subject| is_unlocked(curriculum, subject, policy))
            .map(|subject| subject.name().to_string())
            .collect();

        Ok(Self {
            total,
            done,
            in_progress: count(SubjectStatus::InProgress),
            future: count(SubjectStatus::Future),
            percent_done,
            available_now,
            estimated_terms: critical.estimated_terms(),
            critical_path: critical.path,
            by_term_hint: group_by_term_hint(curriculum),
        })
    }
}

fn is_unlocked(curriculum: &Curriculum, subject: &Subject, policy: MissingPrerequisitePolicy) -> bool {
    subject
        .prerequisites()
        .iter()
        .all(|prereq| match curriculum.get(prereq) {
            Some(p) => p.is_done(),
            None => policy == MissingPrerequisitePolicy::AssumeSatisfied,
        })
}

fn group_by_term_hint(curriculum: &Curriculum) -> Vec<TermGroup> {
    let mut hinted: BTreeMap<u32, Vec<SubjectName>> = BTreeMap::new();
    let mut unhinted = Vec::new();
    for subject in curriculum.iter() {
        match subject.term_hint() {
            Some(term) => hinted
                .entry(term)
                .or_default()
                .push(subject.name().to_string()),
            None => unhinted.push(subject.name().to_string()),
        }
    }

    let mut groups: Vec<TermGroup> = hinted
        .into_iter()
        .map(|(term, subjects)| TermGroup {
            term: Some(term),
            subjects,
        })
        .collect();
    if !unhinted.is_empty() {
        groups.push(TermGroup {
            term: None,
            subjects: unhinted,
        });
    }
    groups
}
