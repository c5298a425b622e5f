// src/watch/mod.rs

//! Re-running the planner when the plan file changes.
//!
//! This module is responsible for:
//! - Wiring up a cross-platform filesystem watcher (`notify`) on the plan
//!   file's directory.
//! - Content hashing so a save that leaves the bytes unchanged does not
//!   trigger a recomputation.
//! - The async loop that reloads the plan on every change until Ctrl-C.
//!
//! It does **not** know about the planning algorithms; the loop calls back
//! into whatever pipeline the caller provides.

pub mod hash;
pub mod runtime;
pub mod watcher;

pub use hash::{compute_file_hash, ContentTracker};
pub use runtime::{run_watch, WatchEvent};
pub use watcher::{spawn_plan_watcher, WatcherHandle};
