pub mod builders;
pub mod fake_notifier;

use std::io::Write;
use std::sync::Once;
use std::time::Duration;

use tempfile::NamedTempFile;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Upper bound for a single monitored run in tests. Real processes sleep
/// for real, and cancellation waits out the interrupt grace period.
pub const RUN_TIMEOUT: Duration = Duration::from_secs(10);

/// Install a test-writer subscriber once per test binary.
///
/// The filter comes from `TASKBOT_LOG` (same variable as the binary, but
/// read as an `EnvFilter` directive), defaulting to `taskbot=debug` so the
/// monitor's lifecycle events show up in failing tests.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = std::env::var(taskbot::logging::ENV_LOG)
            .ok()
            .and_then(|s| EnvFilter::try_new(s).ok())
            .unwrap_or_else(|| EnvFilter::new("taskbot=debug"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Await `f`, failing the test if it outlives [`RUN_TIMEOUT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(RUN_TIMEOUT, f)
        .await
        .expect("monitored run did not finish within RUN_TIMEOUT")
}

/// Write a throwaway `sh` script, one line per entry.
///
/// Keep the returned file alive for as long as the script may run.
pub fn shell_script(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp script");
    for line in lines {
        writeln!(file, "{line}").expect("write temp script");
    }
    file
}
