use curriplan::cli::PlanCommand;
use curriplan::commands::{execute, CommandOptions};
use curriplan::config::parse_plan_str;
use curriplan::errors::PlanError;
use curriplan::run_once;
use curriplan::types::{MissingPrerequisitePolicy, OutputFormat};
use curriplan_test_utils::init_tracing;

const PLAN: &str = r#"
[[subject]]
name = "Calculus I"
status = "done"
term = 1

[[subject]]
name = "Calculus II"
status = "future"
prerequisites = ["Calculus I"]
term = 2

[[subject]]
name = "Calculus III"
status = "future"
prerequisites = ["Calculus II"]
term = 3

[[subject]]
name = "Thesis"
status = "future"
prerequisites = "Calculus III, Research Methods"
"#;

fn text() -> CommandOptions {
    CommandOptions::default()
}

fn json() -> CommandOptions {
    CommandOptions {
        format: OutputFormat::Json,
        ..CommandOptions::default()
    }
}

#[test]
fn test_path_text_and_json() {
    init_tracing();
    let plan = parse_plan_str(PLAN).unwrap();

    let out = execute(PlanCommand::Path, &plan, text()).unwrap();
    assert!(!out.failed);
    assert!(out.text.contains("critical path depth: 3"));
    assert!(out.text.contains("1. Calculus II"));
    assert!(out.text.contains("3. Thesis"));

    let out = execute(PlanCommand::Path, &plan, json()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out.text).unwrap();
    assert_eq!(value["depth"], 3);
    assert_eq!(
        value["path"],
        serde_json::json!(["Calculus II", "Calculus III", "Thesis"])
    );
}

#[test]
fn test_schedule_respects_plan_policy_and_cli_override() {
    let plan = parse_plan_str(PLAN).unwrap();

    let out = execute(PlanCommand::Schedule, &plan, text()).unwrap();
    assert!(out.text.contains("term 1:\n  - Calculus II\n"));
    assert!(out.text.contains("schedule stalled"));
    assert!(out.text.contains("Thesis (waiting on: Research Methods)"));

    let lenient = CommandOptions {
        format: OutputFormat::Json,
        missing_prerequisites: Some(MissingPrerequisitePolicy::AssumeSatisfied),
    };
    let out = execute(PlanCommand::Schedule, &plan, lenient).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out.text).unwrap();
    assert_eq!(value["stalled"], false);
    assert_eq!(value["schedule"]["3"], serde_json::json!(["Thesis"]));
}

#[test]
fn test_check_marks_output_failed() {
    let plan = parse_plan_str(PLAN).unwrap();

    let out = execute(PlanCommand::Check, &plan, text()).unwrap();
    assert!(out.failed);
    assert!(out.text.contains("Research Methods"));

    let lenient = CommandOptions {
        missing_prerequisites: Some(MissingPrerequisitePolicy::AssumeSatisfied),
        ..CommandOptions::default()
    };
    let out = execute(PlanCommand::Check, &plan, lenient).unwrap();
    assert!(!out.failed);
}

#[test]
fn test_summary_json() {
    let plan = parse_plan_str(PLAN).unwrap();

    let out = execute(PlanCommand::Summary, &plan, json()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out.text).unwrap();
    assert_eq!(value["total"], 4);
    assert_eq!(value["done"], 1);
    assert_eq!(value["available_now"], serde_json::json!(["Calculus II"]));
    assert_eq!(value["estimated_terms"], 3);
}

#[test]
fn test_graph_ignores_format() {
    let plan = parse_plan_str(PLAN).unwrap();

    let out = execute(PlanCommand::Graph, &plan, json()).unwrap();
    assert!(out.text.starts_with("digraph curriculum {"));
}

#[test]
fn test_cyclic_plan_fails_path_but_still_renders_graph() {
    init_tracing();
    let plan = parse_plan_str(
        r#"
[[subject]]
name = "X"
status = "future"
prerequisites = ["Y"]

[[subject]]
name = "Y"
status = "future"
prerequisites = ["X"]
"#,
    )
    .unwrap();

    let result = execute(PlanCommand::Path, &plan, text());
    assert!(matches!(result, Err(PlanError::CyclicDependency { .. })));

    let out = execute(PlanCommand::Graph, &plan, text()).unwrap();
    assert!(out.text.contains("\"X\" -> \"Y\""));
    assert!(out.text.contains("\"Y\" -> \"X\""));
    assert!(!out.text.contains("penwidth=2"));
    assert!(!out.failed);
}

#[test]
fn test_run_once_reads_plan_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Curriplan.toml");
    std::fs::write(&path, PLAN).unwrap();

    let out = run_once(&path, PlanCommand::Path, text()).unwrap();
    assert!(out.text.contains("estimated remaining terms: 3"));

    let err = run_once(&dir.path().join("missing.toml"), PlanCommand::Path, text()).unwrap_err();
    assert!(format!("{err:#}").contains("loading plan file"));
}
