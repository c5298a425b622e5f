// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_PLAN_FILE;
use crate::types::{MissingPrerequisitePolicy, OutputFormat};

/// Command-line arguments for `curriplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "curriplan",
    version,
    about = "Plan the remaining terms of a degree from its prerequisite graph.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the plan file (TOML).
    ///
    /// Default: `Curriplan.toml` in the current working directory.
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_PLAN_FILE)]
    pub plan: String,

    /// Output format for command results.
    #[arg(long, global = true, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Override `[planner].missing_prerequisites` from the plan file.
    #[arg(long, global = true, value_enum, value_name = "POLICY")]
    pub missing_prerequisites: Option<MissingPolicyArg>,

    /// Keep running and recompute whenever the plan file changes.
    #[arg(long, global = true)]
    pub watch: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CURRIPLAN_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: PlanCommand,
}

/// What to compute from the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum PlanCommand {
    /// Report cycles, unknown prerequisites and unschedulable subjects.
    Check,
    /// Longest remaining prerequisite chain and estimated terms.
    Path,
    /// Term-by-term enrollment plan.
    Schedule,
    /// Progress counts and subjects available right now.
    Summary,
    /// Prerequisite graph in Graphviz DOT syntax.
    Graph,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum MissingPolicyArg {
    Block,
    AssumeSatisfied,
}

impl From<MissingPolicyArg> for MissingPrerequisitePolicy {
    fn from(arg: MissingPolicyArg) -> Self {
        match arg {
            MissingPolicyArg::Block => MissingPrerequisitePolicy::Block,
            MissingPolicyArg::AssumeSatisfied => MissingPrerequisitePolicy::AssumeSatisfied,
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
