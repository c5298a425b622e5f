// src/report/mod.rs

//! Derived views over a curriculum, ready for output.
//!
//! - [`summary`]: progress counts, unlocked subjects, term-hint grouping.
//! - [`check`]: cycles, dangling references and stalls in one report.
//! - [`text`]: human-readable `Display` impls for every report.
//! - [`dot`]: Graphviz rendering of the prerequisite graph.

pub mod check;
pub mod dot;
pub mod summary;
pub mod text;

pub use check::CheckReport;
pub use dot::render_dot;
pub use summary::{ProgressSummary, TermGroup};
