// src/watch/watcher.rs

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::watch::runtime::WatchEvent;

/// Handle for the filesystem watcher.
///
/// Keeps the underlying `RecommendedWatcher` alive. Dropping this handle
/// stops file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Watch the directory containing `plan_path` and send
/// [`WatchEvent::PlanChanged`] whenever the plan file is created or modified.
///
/// The directory is watched rather than the file itself because many
/// editors save by writing a new file and renaming it over the old one.
pub fn spawn_plan_watcher(
    plan_path: &Path,
    runtime_tx: mpsc::Sender<WatchEvent>,
) -> Result<WatcherHandle> {
    let file_name: OsString = plan_path
        .file_name()
        .with_context(|| format!("plan path {:?} has no file name", plan_path))?
        .to_os_string();
    let dir = watch_dir(plan_path);

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Err(err) = event_tx.send(event) {
                    // Not inside a tracing span here; stderr is all we have.
                    eprintln!("curriplan: failed to forward notify event: {err}");
                }
            }
            Err(err) => {
                eprintln!("curriplan: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    info!("watching {:?} for changes to {:?}", dir, file_name);

    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if !(event.kind.is_modify() || event.kind.is_create()) {
                continue;
            }
            let touches_plan = event
                .paths
                .iter()
                .any(|p| p.file_name() == Some(file_name.as_os_str()));
            if !touches_plan {
                continue;
            }
            debug!(?event, "plan file event");
            if runtime_tx.send(WatchEvent::PlanChanged).await.is_err() {
                break;
            }
        }
        debug!("watcher event loop finished");
    });

    Ok(WatcherHandle { _inner: watcher })
}

/// Directory to watch for a plan path.
///
/// A bare file name like `Curriplan.toml` has an empty parent, in which case
/// the current working directory is used.
fn watch_dir(plan_path: &Path) -> PathBuf {
    match plan_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
