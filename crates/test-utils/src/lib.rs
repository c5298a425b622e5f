//! Shared helpers for the `curriplan` integration tests.

pub mod builders;

use std::sync::Once;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Route planner logs through the test harness.
///
/// Output is only shown for failing tests (or with `--nocapture`). Set
/// `RUST_LOG=curriplan=debug` to see term assignments and graph sizes.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,curriplan=info"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init();
    });
}

/// Await `fut`, failing the test if it takes longer than five seconds.
pub async fn with_timeout<F, T>(fut: F) -> T
where
    F: Future<Output = T>,
{
    tokio::time::timeout(Duration::from_secs(5), fut)
        .await
        .expect("test timed out after 5 seconds")
}
