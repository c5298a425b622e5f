use std::collections::HashSet;

use proptest::prelude::*;
use curriplan::dag::{compute_critical_path, simulate_schedule};
use curriplan::types::SubjectStatus;
use curriplan::Curriculum;
use curriplan_test_utils::builders::CurriculumBuilder;

fn status_from_index(i: u8) -> SubjectStatus {
    match i % 3 {
        0 => SubjectStatus::Done,
        1 => SubjectStatus::InProgress,
        _ => SubjectStatus::Future,
    }
}

// Strategy to generate an acyclic curriculum.
// Acyclicity holds because subject N may only require subjects 0..N-1.
fn curriculum_strategy(max_subjects: usize, all_future: bool) -> impl Strategy<Value = Curriculum> {
    (1..=max_subjects).prop_flat_map(move |count| {
        let deps = proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..4),
            count,
        );
        let statuses = proptest::collection::vec(any::<u8>(), count);

        (deps, statuses).prop_map(move |(raw_deps, raw_statuses)| {
            let mut builder = CurriculumBuilder::new();
            for (i, potential) in raw_deps.into_iter().enumerate() {
                let name = format!("s{i:02}");
                let mut valid: HashSet<String> = HashSet::new();
                if i > 0 {
                    for idx in potential {
                        valid.insert(format!("s{:02}", idx % i));
                    }
                }
                let prereqs: Vec<&str> = valid.iter().map(String::as_str).collect();
                let status = if all_future {
                    SubjectStatus::Future
                } else {
                    status_from_index(raw_statuses[i])
                };
                builder = builder.with_subject(&name, status, &prereqs);
            }
            builder.build()
        })
    })
}

proptest! {
    #[test]
    fn test_all_future_schedule_length_matches_critical_path(
        curriculum in curriculum_strategy(12, true)
    ) {
        let path = compute_critical_path(&curriculum).unwrap();
        let schedule = simulate_schedule(&curriculum);

        prop_assert!(!schedule.stalled);
        prop_assert_eq!(schedule.scheduled_count(), curriculum.len());
        prop_assert_eq!(schedule.term_count(), path.depth);
    }

    #[test]
    fn test_schedule_respects_prerequisites(
        curriculum in curriculum_strategy(12, false)
    ) {
        let schedule = simulate_schedule(&curriculum);
        prop_assert!(!schedule.stalled);

        for subject in curriculum.iter() {
            let Some(term) = schedule.term_of(subject.name()) else {
                prop_assert_ne!(subject.status(), SubjectStatus::Future);
                continue;
            };
            prop_assert_eq!(subject.status(), SubjectStatus::Future);
            for prereq in subject.prerequisites() {
                let dep = curriculum.get(prereq).unwrap();
                if dep.status() == SubjectStatus::Future {
                    let dep_term = schedule.term_of(prereq).unwrap();
                    prop_assert!(dep_term < term, "{} in {} but needs {} from {}", subject.name(), term, prereq, dep_term);
                }
            }
        }
    }

    #[test]
    fn test_critical_path_is_a_pending_chain(
        curriculum in curriculum_strategy(12, false)
    ) {
        let result = compute_critical_path(&curriculum).unwrap();
        let pending = curriculum.pending().count();

        prop_assert_eq!(result.depth, result.path.len());
        prop_assert!(result.depth <= pending);
        prop_assert_eq!(result.depth == 0, pending == 0);
        for name in &result.path {
            prop_assert!(curriculum.is_pending(name));
        }
        for pair in result.path.windows(2) {
            let later = curriculum.get(&pair[1]).unwrap();
            prop_assert!(later.prerequisites().contains(&pair[0]));
        }
    }

    #[test]
    fn test_engine_is_idempotent(
        curriculum in curriculum_strategy(10, false)
    ) {
        prop_assert_eq!(
            compute_critical_path(&curriculum).unwrap(),
            compute_critical_path(&curriculum).unwrap()
        );
        prop_assert_eq!(simulate_schedule(&curriculum), simulate_schedule(&curriculum));
    }
}
