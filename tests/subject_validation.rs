use curriplan::curriculum::{Curriculum, DanglingReference, Subject};
use curriplan::errors::PlanError;
use curriplan::types::SubjectStatus;
use curriplan_test_utils::builders::CurriculumBuilder;

#[test]
fn test_names_and_prerequisites_are_trimmed_and_deduplicated() {
    let subject = Subject::new(
        "  Linear Algebra ",
        SubjectStatus::Future,
        ["Calculus I", " Calculus I", "Algebra  "],
    )
    .unwrap();

    assert_eq!(subject.name(), "Linear Algebra");
    let prereqs: Vec<&str> = subject.prerequisites().iter().map(String::as_str).collect();
    assert_eq!(prereqs, vec!["Algebra", "Calculus I"]);
    assert_eq!(subject.term_hint(), None);
    assert_eq!(subject.with_term_hint(3).term_hint(), Some(3));
}

#[test]
fn test_empty_name_is_rejected() {
    let err = Subject::new("   ", SubjectStatus::Done, Vec::<String>::new()).unwrap_err();
    assert!(matches!(err, PlanError::InvalidSubject(_)), "got {err:?}");
}

#[test]
fn test_empty_prerequisite_is_rejected() {
    let err = Subject::new("A", SubjectStatus::Future, ["B", " "]).unwrap_err();
    match err {
        PlanError::InvalidSubject(msg) => assert!(msg.contains("'A'")),
        other => panic!("Expected InvalidSubject, got: {other:?}"),
    }
}

#[test]
fn test_self_reference_after_trimming_is_rejected() {
    let err = Subject::new("Physics", SubjectStatus::Done, [" Physics "]).unwrap_err();
    assert!(matches!(err, PlanError::CyclicDependency { .. }), "got {err:?}");
}

#[test]
fn test_duplicate_names_are_rejected() {
    let a1 = Subject::new("A", SubjectStatus::Done, Vec::<String>::new()).unwrap();
    let a2 = Subject::new(" A", SubjectStatus::Future, Vec::<String>::new()).unwrap();

    match Curriculum::new([a1, a2]) {
        Err(PlanError::DuplicateSubject(msg)) => assert!(msg.contains("'A'")),
        other => panic!("Expected DuplicateSubject, got: {other:?}"),
    }
}

#[test]
fn test_curriculum_queries() {
    let curriculum = CurriculumBuilder::new()
        .done("A", &[])
        .in_progress("B", &["A"])
        .future("C", &["B", "Ghost"])
        .build();

    assert_eq!(curriculum.len(), 3);
    assert!(curriculum.contains("B"));
    assert!(!curriculum.contains("Ghost"));
    assert!(curriculum.is_pending("B"));
    assert!(!curriculum.is_pending("A"));
    assert!(!curriculum.is_pending("Ghost"));

    let pending: Vec<&str> = curriculum.pending().map(|s| s.name()).collect();
    assert_eq!(pending, vec!["B", "C"]);

    assert_eq!(
        curriculum.dangling_references(),
        vec![DanglingReference {
            subject: "C".to_string(),
            prerequisite: "Ghost".to_string(),
        }]
    );
}

#[test]
fn test_status_aliases() {
    let cases = [
        ("done", SubjectStatus::Done),
        ("Concluída", SubjectStatus::Done),
        ("COMPLETED", SubjectStatus::Done),
        ("in-progress", SubjectStatus::InProgress),
        ("Cursando", SubjectStatus::InProgress),
        (" in progress ", SubjectStatus::InProgress),
        ("future", SubjectStatus::Future),
        ("A cursar", SubjectStatus::Future),
        ("planned", SubjectStatus::Future),
    ];
    for (input, expected) in cases {
        assert_eq!(input.parse::<SubjectStatus>(), Ok(expected), "input {input:?}");
    }
    assert!("maybe".parse::<SubjectStatus>().is_err());
}
