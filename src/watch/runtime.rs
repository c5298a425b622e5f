// src/watch/runtime.rs

use std::path::{Path, PathBuf};

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::watch::hash::ContentTracker;
use crate::watch::watcher::spawn_plan_watcher;

/// Events consumed by the watch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEvent {
    /// The plan file was written; its content may or may not differ.
    PlanChanged,
    ShutdownRequested,
}

/// Run `on_change` once at startup and again after every content change of
/// `plan_path`, until Ctrl-C.
///
/// Errors from `on_change` are logged and the loop keeps going, so a typo in
/// the plan file does not end the session.
pub async fn run_watch<F>(plan_path: PathBuf, on_change: F) -> Result<()>
where
    F: FnMut(&Path) -> Result<()>,
{
    let (tx, rx) = mpsc::channel::<WatchEvent>(16);
    let _watcher = spawn_plan_watcher(&plan_path, tx.clone())?;

    // Ctrl-C -> graceful shutdown.
    {
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(WatchEvent::ShutdownRequested).await;
        });
    }

    tx.send(WatchEvent::PlanChanged).await?;
    drive(&plan_path, rx, on_change).await
}

/// Event loop behind [`run_watch`], separated from the watcher so it can be
/// fed events directly.
pub async fn drive<F>(
    plan_path: &Path,
    mut rx: mpsc::Receiver<WatchEvent>,
    mut on_change: F,
) -> Result<()>
where
    F: FnMut(&Path) -> Result<()>,
{
    info!(?plan_path, "watch loop started");
    let mut tracker = ContentTracker::new();

    while let Some(event) = rx.recv().await {
        debug!(?event, "watch loop received event");
        match event {
            WatchEvent::PlanChanged => match tracker.observe(plan_path) {
                Ok(true) => {
                    if let Err(err) = on_change(plan_path) {
                        error!("plan evaluation failed: {err:#}");
                    }
                }
                Ok(false) => {}
                Err(err) => warn!("could not read plan file: {err:#}"),
            },
            WatchEvent::ShutdownRequested => {
                info!("shutdown requested; stopping watch loop");
                break;
            }
        }
    }

    info!("watch loop exiting");
    Ok(())
}
