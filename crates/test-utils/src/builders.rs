#![allow(dead_code)]

use curriplan::curriculum::{Curriculum, Subject};
use curriplan::types::SubjectStatus;

/// Builder for `Curriculum` to simplify test setup.
///
/// Subjects are validated when added, so a test that wants to observe a
/// construction error should call `Subject::new` directly instead.
pub struct CurriculumBuilder {
    subjects: Vec<Subject>,
}

impl CurriculumBuilder {
    pub fn new() -> Self {
        Self {
            subjects: Vec::new(),
        }
    }

    pub fn with_subject(mut self, name: &str, status: SubjectStatus, prereqs: &[&str]) -> Self {
        let subject = Subject::new(name, status, prereqs.iter().copied())
            .expect("builder subject must be valid");
        self.subjects.push(subject);
        self
    }

    pub fn done(self, name: &str, prereqs: &[&str]) -> Self {
        self.with_subject(name, SubjectStatus::Done, prereqs)
    }

    pub fn in_progress(self, name: &str, prereqs: &[&str]) -> Self {
        self.with_subject(name, SubjectStatus::InProgress, prereqs)
    }

    pub fn future(self, name: &str, prereqs: &[&str]) -> Self {
        self.with_subject(name, SubjectStatus::Future, prereqs)
    }

    /// Attach a term hint to the most recently added subject.
    pub fn term(mut self, term: u32) -> Self {
        if let Some(last) = self.subjects.pop() {
            self.subjects.push(last.with_term_hint(term));
        }
        self
    }

    pub fn build(self) -> Curriculum {
        Curriculum::new(self.subjects).expect("Failed to build valid curriculum from builder")
    }
}

impl Default for CurriculumBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A linear chain where each subject requires the previous one, all future.
///
/// `chain(&["A", "B", "C"])` means C requires B and B requires A.
pub fn chain(names: &[&str]) -> Curriculum {
    let mut builder = CurriculumBuilder::new();
    for (i, name) in names.iter().enumerate() {
        let prereqs: Vec<&str> = if i == 0 { vec![] } else { vec![names[i - 1]] };
        builder = builder.future(name, &prereqs);
    }
    builder.build()
}

/// Render a minimal plan file in TOML for loader tests.
pub fn plan_toml(entries: &[(&str, &str, &[&str])]) -> String {
    let mut out = String::new();
    for (name, status, prereqs) in entries {
        out.push_str("[[subject]]\n");
        out.push_str(&format!("name = {name:?}\n"));
        out.push_str(&format!("status = {status:?}\n"));
        let list: Vec<String> = prereqs.iter().map(|p| format!("{p:?}")).collect();
        out.push_str(&format!("prerequisites = [{}]\n\n", list.join(", ")));
    }
    out
}
