// src/commands.rs

//! One function per CLI command, all sharing the same shape: take a
//! validated plan, compute, and hand back printable output.

use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::PlanCommand;
use crate::config::PlanFile;
use crate::dag::{compute_critical_path, simulate_schedule_with, CriticalPath};
use crate::errors::Result;
use crate::report::{render_dot, CheckReport, ProgressSummary};
use crate::types::{MissingPrerequisitePolicy, OutputFormat};

/// Per-invocation settings resolved from the CLI and the plan file.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandOptions {
    pub format: OutputFormat,
    /// CLI override; `None` means use the plan file's `[planner]` setting.
    pub missing_prerequisites: Option<MissingPrerequisitePolicy>,
}

/// Rendered result of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    /// Set when the command found problems that should fail the process
    /// (currently only `check`).
    pub failed: bool,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        Self {
            text,
            failed: false,
        }
    }
}

/// Run `command` against an already validated plan.
pub fn execute(
    command: PlanCommand,
    plan: &PlanFile,
    options: CommandOptions,
) -> Result<CommandOutput> {
    let curriculum = plan.curriculum();
    let policy = options
        .missing_prerequisites
        .unwrap_or_else(|| plan.missing_prerequisites());
    debug!(?command, ?policy, subjects = curriculum.len(), "executing command");

    match command {
        PlanCommand::Path => {
            let path = compute_critical_path(curriculum)?;
            render(&path, options.format).map(CommandOutput::ok)
        }
        PlanCommand::Schedule => {
            let schedule = simulate_schedule_with(curriculum, policy);
            render(&schedule, options.format).map(CommandOutput::ok)
        }
        PlanCommand::Summary => {
            let summary = ProgressSummary::from_curriculum(curriculum, policy)?;
            render(&summary, options.format).map(CommandOutput::ok)
        }
        PlanCommand::Check => {
            let report = CheckReport::from_curriculum(curriculum, policy);
            Ok(CommandOutput {
                text: render(&report, options.format)?,
                failed: report.has_errors(),
            })
        }
        PlanCommand::Graph => {
            // A cyclic plan still renders, just without a highlighted path.
            let path = match compute_critical_path(curriculum) {
                Ok(path) => path,
                Err(err) => {
                    warn!(error = %err, "no critical path to highlight");
                    CriticalPath::default()
                }
            };
            Ok(CommandOutput::ok(render_dot(curriculum, &path)))
        }
    }
}

fn render<T>(value: &T, format: OutputFormat) -> Result<String>
where
    T: Serialize + std::fmt::Display,
{
    match format {
        OutputFormat::Text => Ok(value.to_string()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(value)?;
            json.push('\n');
            Ok(json)
        }
    }
}
