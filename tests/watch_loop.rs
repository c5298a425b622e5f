use curriplan::watch::runtime::drive;
use curriplan::watch::{ContentTracker, WatchEvent};
use curriplan_test_utils::{init_tracing, with_timeout};
use tokio::sync::mpsc;

#[test]
fn test_tracker_reports_only_content_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Curriplan.toml");
    std::fs::write(&path, "a").unwrap();

    let mut tracker = ContentTracker::new();
    assert!(tracker.last_hash().is_none());
    assert!(tracker.observe(&path).unwrap());
    assert!(!tracker.observe(&path).unwrap());

    std::fs::write(&path, "b").unwrap();
    assert!(tracker.observe(&path).unwrap());

    // Rewriting identical bytes is not a change.
    std::fs::write(&path, "b").unwrap();
    assert!(!tracker.observe(&path).unwrap());
    assert!(tracker.last_hash().is_some());
}

#[test]
fn test_tracker_errors_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = ContentTracker::new();
    assert!(tracker.observe(&dir.path().join("gone.toml")).is_err());
}

#[tokio::test]
async fn test_drive_recomputes_once_per_content_change() {
    init_tracing();
    with_timeout(async {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Curriplan.toml");
        std::fs::write(&path, "v1").unwrap();

        let (tx, rx) = mpsc::channel(8);
        tx.send(WatchEvent::PlanChanged).await.unwrap();
        tx.send(WatchEvent::PlanChanged).await.unwrap();
        tx.send(WatchEvent::ShutdownRequested).await.unwrap();

        let mut calls = 0;
        drive(&path, rx, |_| {
            calls += 1;
            Ok(())
        })
        .await
        .unwrap();

        assert_eq!(calls, 1);
    })
    .await;
}

#[tokio::test]
async fn test_drive_keeps_running_after_errors() {
    with_timeout(async {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Curriplan.toml");
        std::fs::write(&path, "broken").unwrap();

        let (tx, rx) = mpsc::channel(8);
        tx.send(WatchEvent::PlanChanged).await.unwrap();
        tx.send(WatchEvent::PlanChanged).await.unwrap();
        drop(tx);

        let writer_path = path.clone();
        let mut calls = 0;
        // Each call edits the file and fails; the edit makes the next event
        // count as a change, and the closed channel ends the loop.
        drive(&path, rx, |_| {
            calls += 1;
            std::fs::write(&writer_path, format!("attempt {calls}"))?;
            anyhow::bail!("invalid plan")
        })
        .await
        .unwrap();

        assert_eq!(calls, 2);
    })
    .await;
}
