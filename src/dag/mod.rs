// src/dag/mod.rs

//! Prerequisite graph algorithms.
//!
//! - [`graph`] holds the graph of pending subjects and their active
//!   prerequisites.
//! - [`critical_path`] computes the longest remaining chain.
//! - [`scheduler`] simulates a term-by-term enrollment plan.
//! - [`cycles`] enumerates every dependency cycle for diagnostics.
//!
//! Everything here is a pure function of a [`Curriculum`] snapshot.
//!
//! [`Curriculum`]: crate::curriculum::Curriculum

pub mod critical_path;
pub mod cycles;
pub mod graph;
pub mod scheduler;

pub use critical_path::{compute_critical_path, CriticalPath};
pub use cycles::find_cycles;
pub use graph::PrerequisiteGraph;
pub use scheduler::{simulate_schedule, simulate_schedule_with, ScheduleReport};
