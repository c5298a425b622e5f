// src/dag/critical_path.rs

//! Longest remaining chain of pending subjects.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::curriculum::{Curriculum, SubjectName};
use crate::dag::graph::PrerequisiteGraph;
use crate::errors::{PlanError, Result};

/// Result of [`compute_critical_path`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CriticalPath {
    /// Number of subjects on the longest pending chain.
    pub depth: usize,
    /// The chain itself, earliest prerequisite first, bottleneck last.
    pub path: Vec<SubjectName>,
}

impl CriticalPath {
    /// Terms needed to clear the longest chain, one chain position per term.
    pub fn estimated_terms(&self) -> usize {
        self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether `name` lies on the chain.
    pub fn contains(&self, name: &str) -> bool {
        self.path.iter().any(|p| p == name)
    }

    /// Whether `prerequisite -> dependent` is a consecutive pair on the chain.
    pub fn contains_edge(&self, prerequisite: &str, dependent: &str) -> bool {
        self.path
            .windows(2)
            .any(|w| w[0] == prerequisite && w[1] == dependent)
    }
}

/// DFS bookkeeping for one subject.
#[derive(Debug, Clone, Copy)]
enum Visit<'g> {
    /// On the current descent; seeing it again means a cycle.
    Open,
    Closed {
        depth: usize,
        /// Prerequisite that realises `depth - 1`, if any.
        via: Option<&'g str>,
    },
}

struct DepthWalker<'g> {
    graph: &'g PrerequisiteGraph,
    visits: HashMap<&'g str, Visit<'g>>,
    stack: Vec<&'g str>,
}

impl<'g> DepthWalker<'g> {
    fn new(graph: &'g PrerequisiteGraph) -> Self {
        Self {
            graph,
            visits: HashMap::with_capacity(graph.len()),
            stack: Vec::new(),
        }
    }

    fn depth_of(&mut self, name: &'g str) -> Result<usize> {
        match self.visits.get(name) {
            Some(Visit::Closed { depth, .. }) => return Ok(*depth),
            Some(Visit::Open) => return Err(self.cycle_error(name)),
            None => {}
        }

        self.visits.insert(name, Visit::Open);
        self.stack.push(name);

        let graph = self.graph;
        let mut best: Option<(usize, &'g str)> = None;
        for dep in graph.active_prerequisites_of(name) {
            let depth = self.depth_of(dep.as_str())?;
            // Strict comparison keeps the smallest name on ties.
            if best.is_none_or(|(best_depth, _)| depth > best_depth) {
                best = Some((depth, dep.as_str()));
            }
        }

        self.stack.pop();
        let depth = 1 + best.map_or(0, |(d, _)| d);
        self.visits.insert(
            name,
            Visit::Closed {
                depth,
                via: best.map(|(_, n)| n),
            },
        );
        Ok(depth)
    }

    fn cycle_error(&self, revisited: &str) -> PlanError {
        let start = self
            .stack
            .iter()
            .position(|n| *n == revisited)
            .unwrap_or(0);
        let mut cycle: Vec<SubjectName> =
            self.stack[start..].iter().map(|s| s.to_string()).collect();
        cycle.push(revisited.to_string());
        PlanError::CyclicDependency { cycle }
    }

    /// Follow the `via` links back from `last`, earliest prerequisite first.
    fn chain_ending_at(&self, last: &'g str) -> Vec<SubjectName> {
        let mut chain = Vec::new();
        let mut cursor = Some(last);
        while let Some(name) = cursor {
            chain.push(name.to_string());
            cursor = match self.visits.get(name) {
                Some(Visit::Closed { via, .. }) => *via,
                _ => None,
            };
        }
        chain.reverse();
        chain
    }
}

/// Compute the longest chain of pending subjects.
///
/// Only subjects that are not done take part; done prerequisites and names
/// that match no subject are ignored. Fails with
/// [`PlanError::CyclicDependency`] as soon as a pending subject is reached
/// again while its own descent is still open.
pub fn compute_critical_path(curriculum: &Curriculum) -> Result<CriticalPath> {
    let graph = PrerequisiteGraph::from_curriculum(curriculum);
    if graph.is_empty() {
        return Ok(CriticalPath::default());
    }

    let mut walker = DepthWalker::new(&graph);
    let mut best: Option<(usize, &str)> = None;
    for name in graph.subjects() {
        let depth = walker.depth_of(name)?;
        if best.is_none_or(|(best_depth, _)| depth > best_depth) {
            best = Some((depth, name));
        }
    }

    let Some((depth, last)) = best else {
        return Ok(CriticalPath::default());
    };
    let path = walker.chain_ending_at(last);

    debug!(
        pending = graph.len(),
        edges = graph.edge_count(),
        depth,
        ?path,
        "computed critical path"
    );

    Ok(CriticalPath { depth, path })
}
