// src/curriculum/mod.rs

//! Validated in-memory model of a degree plan.
//!
//! - [`subject`] holds a single course and its prerequisite names.
//! - [`catalog`] holds the full snapshot the engine computes over.
//!
//! Both types can only be built through constructors that enforce the
//! naming invariants, so the graph algorithms never see an empty name, a
//! self-referencing prerequisite or two subjects sharing a name.

pub mod catalog;
pub mod subject;

pub use catalog::{Curriculum, DanglingReference};
pub use subject::{Subject, SubjectName};
