// src/dag/cycles.rs

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::curriculum::{Curriculum, SubjectName};
use crate::dag::graph::PrerequisiteGraph;

/// Every dependency cycle among pending subjects.
///
/// Each entry is one strongly connected component of the active-prerequisite
/// graph with more than one subject (or a subject requiring itself), sorted
/// by name. Done subjects never take part, so a cycle that has already been
/// broken by completing one of its members is not reported.
pub fn find_cycles(curriculum: &Curriculum) -> Vec<Vec<SubjectName>> {
    let prereqs = PrerequisiteGraph::from_curriculum(curriculum);

    // Edge direction: prerequisite -> dependent.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for name in prereqs.subjects() {
        graph.add_node(name);
    }
    for name in prereqs.subjects() {
        for dep in prereqs.active_prerequisites_of(name) {
            graph.add_edge(dep.as_str(), name, ());
        }
    }

    let mut cycles: Vec<Vec<SubjectName>> = tarjan_scc(&graph)
        .into_iter()
        .filter(|component| {
            component.len() > 1 || graph.contains_edge(component[0], component[0])
        })
        .map(|component| {
            let mut names: Vec<SubjectName> =
                component.into_iter().map(str::to_string).collect();
            names.sort();
            names
        })
        .collect();
    cycles.sort();

    debug!(count = cycles.len(), "cycle scan finished");
    cycles
}
