// src/lib.rs

pub mod cli;
pub mod commands;
pub mod config;
pub mod curriculum;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod report;
pub mod types;
pub mod watch;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::{CliArgs, PlanCommand};
use crate::commands::{execute, CommandOptions, CommandOutput};
use crate::config::load_and_validate;

pub use crate::curriculum::{Curriculum, Subject};
pub use crate::dag::{
    compute_critical_path, find_cycles, simulate_schedule, simulate_schedule_with, CriticalPath,
    ScheduleReport,
};
pub use crate::errors::PlanError;
pub use crate::types::{MissingPrerequisitePolicy, SubjectStatus};

/// High-level entry point used by `main.rs`.
///
/// One-shot mode loads the plan, runs the command, prints the result and
/// fails if `check` found errors. With `--watch` the same pipeline is re-run
/// for every content change of the plan file until Ctrl-C.
pub async fn run(args: CliArgs) -> Result<()> {
    let plan_path = PathBuf::from(&args.plan);
    let command = args.command;
    let options = CommandOptions {
        format: args.format.into(),
        missing_prerequisites: args.missing_prerequisites.map(Into::into),
    };

    if args.watch {
        info!(?plan_path, ?command, "starting watch mode");
        return watch::run_watch(plan_path, move |path| {
            let output = run_once(path, command, options)?;
            print!("{}", output.text);
            if output.failed {
                warn!("plan check found errors");
            }
            Ok(())
        })
        .await;
    }

    let output = run_once(&plan_path, command, options)?;
    print!("{}", output.text);
    if output.failed {
        anyhow::bail!("plan check found errors in {:?}", plan_path);
    }
    Ok(())
}

/// Load a snapshot, compute, discard.
pub fn run_once(
    plan_path: &Path,
    command: PlanCommand,
    options: CommandOptions,
) -> Result<CommandOutput> {
    let plan = load_and_validate(plan_path)
        .with_context(|| format!("loading plan file {:?}", plan_path))?;
    let output = execute(command, &plan, options)?;
    Ok(output)
}
