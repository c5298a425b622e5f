// src/report/dot.rs

//! Graphviz rendering of the prerequisite graph.
//!
//! Nodes are coloured by status, edges by whether the prerequisite is
//! already done, and the critical path is drawn bold red.

use std::fmt::Write;

use petgraph::graphmap::DiGraphMap;

use crate::curriculum::Curriculum;
use crate::dag::CriticalPath;
use crate::types::SubjectStatus;

const CRITICAL_COLOR: &str = "#d62728";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeState {
    /// Prerequisite is done.
    Satisfied,
    /// Prerequisite exists but is not done yet.
    Open,
    /// Prerequisite names no subject.
    Dangling,
}

/// Render the whole curriculum as a `digraph` in DOT syntax.
pub fn render_dot(curriculum: &Curriculum, critical: &CriticalPath) -> String {
    // Edge direction: prerequisite -> dependent.
    let mut graph: DiGraphMap<&str, EdgeState> = DiGraphMap::new();
    for subject in curriculum.iter() {
        graph.add_node(subject.name());
    }
    for subject in curriculum.iter() {
        for prereq in subject.prerequisites() {
            let state = match curriculum.get(prereq) {
                Some(p) if p.is_done() => EdgeState::Satisfied,
                Some(_) => EdgeState::Open,
                None => EdgeState::Dangling,
            };
            graph.add_edge(prereq.as_str(), subject.name(), state);
        }
    }

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "digraph curriculum {{");
    let _ = writeln!(out, "  rankdir=LR;");
    let _ = writeln!(
        out,
        "  node [shape=box, style=\"rounded,filled\", fontname=\"Helvetica\"];"
    );

    for name in graph.nodes() {
        let mut attrs = match curriculum.get(name).map(|s| s.status()) {
            Some(SubjectStatus::Done) => "fillcolor=\"#b7e1a1\"".to_string(),
            Some(SubjectStatus::InProgress) => "fillcolor=\"#ffe08a\"".to_string(),
            Some(SubjectStatus::Future) => "fillcolor=\"#e0e0e0\"".to_string(),
            None => format!("style=\"dashed\", color=\"{CRITICAL_COLOR}\", fillcolor=\"white\""),
        };
        if critical.contains(name) {
            let _ = write!(attrs, ", color=\"{CRITICAL_COLOR}\", penwidth=2");
        }
        let _ = writeln!(out, "  \"{}\" [{attrs}];", escape(name));
    }

    for (from, to, state) in graph.all_edges() {
        let mut attrs = match state {
            EdgeState::Satisfied => "color=\"#2ca02c\"".to_string(),
            EdgeState::Open => "color=\"#7f7f7f\"".to_string(),
            EdgeState::Dangling => format!("color=\"{CRITICAL_COLOR}\", style=\"dashed\""),
        };
        if critical.contains_edge(from, to) {
            attrs = format!("color=\"{CRITICAL_COLOR}\", penwidth=2");
        }
        let _ = writeln!(out, "  \"{}\" -> \"{}\" [{attrs}];", escape(from), escape(to));
    }

    out.push_str("}\n");
    out
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
