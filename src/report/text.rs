// src/report/text.rs

//! Plain-text rendering used by `--format text`.

use std::fmt;

use crate::dag::{CriticalPath, ScheduleReport};
use crate::report::check::CheckReport;
use crate::report::summary::ProgressSummary;

impl fmt::Display for CriticalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "nothing left to plan: every subject is done");
        }
        writeln!(f, "critical path depth: {}", self.depth)?;
        writeln!(f, "estimated remaining terms: {}", self.estimated_terms())?;
        writeln!(f, "chain:")?;
        for (i, name) in self.path.iter().enumerate() {
            writeln!(f, "  {}. {name}", i + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for ScheduleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() && !self.stalled {
            return writeln!(f, "no future subjects to schedule");
        }
        for (term, subjects) in &self.terms {
            writeln!(f, "term {term}:")?;
            for name in subjects {
                writeln!(f, "  - {name}")?;
            }
        }
        if self.stalled {
            writeln!(f, "schedule stalled; unresolved subjects:")?;
            for name in &self.unresolved {
                let missing = self
                    .blockers
                    .get(name)
                    .map(|b| b.join(", "))
                    .unwrap_or_default();
                writeln!(f, "  - {name} (waiting on: {missing})")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "subjects: {} total, {} done, {} in progress, {} future",
            self.total, self.done, self.in_progress, self.future
        )?;
        writeln!(f, "progress: {:.1}%", self.percent_done)?;
        writeln!(f, "estimated remaining terms: {}", self.estimated_terms)?;
        if !self.critical_path.is_empty() {
            writeln!(f, "critical path: {}", self.critical_path.join(" -> "))?;
        }
        if self.available_now.is_empty() {
            writeln!(f, "available now: none")?;
        } else {
            writeln!(f, "available now:")?;
            for name in &self.available_now {
                writeln!(f, "  - {name}")?;
            }
        }
        writeln!(f, "by ideal term:")?;
        for group in &self.by_term_hint {
            match group.term {
                Some(term) => writeln!(f, "  term {term}: {}", group.subjects.join(", "))?,
                None => writeln!(f, "  unassigned: {}", group.subjects.join(", "))?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.dangling.is_empty() {
            writeln!(f, "Warning: prerequisites naming no subject:")?;
            for d in &self.dangling {
                writeln!(f, "  {} requires '{}' (not found)", d.subject, d.prerequisite)?;
            }
        }
        if !self.cycles.is_empty() {
            writeln!(f, "Error: dependency cycles among pending subjects:")?;
            for cycle in &self.cycles {
                writeln!(f, "  {}", cycle.join(" <-> "))?;
            }
        }
        if self.stalled {
            writeln!(f, "Error: subjects that can never be scheduled:")?;
            for name in &self.unresolved {
                let missing = self
                    .blockers
                    .get(name)
                    .map(|b| b.join(", "))
                    .unwrap_or_default();
                writeln!(f, "  {name} (waiting on: {missing})")?;
            }
        }
        if self.has_errors() {
            writeln!(
                f,
                "Found {} error(s) and {} warning(s)",
                self.error_count(),
                self.warning_count()
            )
        } else if self.warning_count() > 0 {
            writeln!(f, "Plan OK with {} warning(s)", self.warning_count())
        } else {
            writeln!(f, "Plan OK")
        }
    }
}
