// src/logging.rs

//! Logging setup for `curriplan` using `tracing` + `tracing-subscriber`.
//!
//! The filter comes from, in order:
//! 1. `--log-level` (applies to this crate; dependencies stay at `warn`)
//! 2. `CURRIPLAN_LOG`, read as a full `EnvFilter` directive
//!    (e.g. `debug` or `curriplan::dag=trace,notify=info`)
//! 3. `info`
//!
//! Logs go to stderr; stdout is reserved for command output so that DOT and
//! JSON can be piped into other tools.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

/// Environment variable consulted when `--log-level` is absent.
pub const LOG_ENV_VAR: &str = "CURRIPLAN_LOG";

/// Install the global subscriber. Call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = match cli_level {
        Some(level) => EnvFilter::try_new(format!("warn,curriplan={}", directive(level)))
            .context("building log filter from --log-level")?,
        None => EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info")),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))
}

fn directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
