// src/dag/graph.rs

use std::collections::BTreeMap;

use tracing::debug;

use crate::curriculum::{Curriculum, SubjectName};

/// Graph of pending subjects keyed by name.
///
/// Done prerequisites and names that match no subject are left out: they no
/// longer constrain the remaining plan. No acyclicity is assumed here; the
/// algorithms built on top detect cycles themselves.
#[derive(Debug, Clone)]
pub struct PrerequisiteGraph {
    /// Pending subject to its pending prerequisites.
    nodes: BTreeMap<SubjectName, Vec<SubjectName>>,
}

impl PrerequisiteGraph {
    /// Build the active-prerequisite graph from a curriculum.
    pub fn from_curriculum(curriculum: &Curriculum) -> Self {
        let nodes: BTreeMap<SubjectName, Vec<SubjectName>> = curriculum
            .pending()
            .map(|subject| {
                let deps = subject
                    .prerequisites()
                    .iter()
                    .filter(|p| curriculum.is_pending(p))
                    .cloned()
                    .collect();
                (subject.name().to_string(), deps)
            })
            .collect();

        debug!(pending = nodes.len(), "built prerequisite graph");
        Self { nodes }
    }

    /// Pending subject names, in name order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Active prerequisites of a subject, in name order.
    pub fn active_prerequisites_of(&self, name: &str) -> &[SubjectName] {
        self.nodes
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of active prerequisite edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Vec::len).sum()
    }
}
