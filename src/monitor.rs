// src/monitor.rs

//! Drives one task from spawn to the final notification.
//!
//! Sequence:
//! 1. spawn the process (a spawn failure gets a best-effort notification),
//! 2. send the "started" message with the PID,
//! 3. wait for exit, or kill the process if shutdown is requested first,
//! 4. send the result message.

use std::time::Duration;

use tracing::{error, info, warn};

use crate::errors::{Result, TaskbotError};
use crate::exec::{self, Invocation, RunResult};
use crate::notify::{Notifier, message};
use crate::shutdown::Shutdown;
use crate::types::TaskOutcome;

/// How long to wait for our own Ctrl-C handler after the task died of the
/// same interrupt. Both are delivered together; the handler may lag.
const INTERRUPT_GRACE: Duration = Duration::from_millis(200);

/// Runs a single invocation and reports on it through `N`.
#[derive(Debug)]
pub struct Monitor<N: Notifier> {
    notifier: N,
}

impl<N: Notifier> Monitor<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    /// Run `invocation` to completion, with no way to cancel it.
    pub async fn run(&self, invocation: &Invocation) -> Result<RunResult> {
        self.run_until(invocation, Shutdown::never()).await
    }

    /// Run `invocation`, killing it if `shutdown` is requested before it
    /// exits.
    ///
    /// A shutdown that is already pending when the process exits wins: the
    /// run is reported as cancelled either way. A non-zero exit is not an
    /// error: it is reported in the chat and returned in the [`RunResult`].
    /// Errors are reserved for spawn and delivery failures.
    pub async fn run_until(
        &self,
        invocation: &Invocation,
        mut shutdown: Shutdown,
    ) -> Result<RunResult> {
        let label = invocation.label();

        let mut task = match exec::spawn(invocation) {
            Ok(task) => task,
            Err(err) => {
                if let TaskbotError::Spawn { source, .. } = &err {
                    self.notify_best_effort(&message::spawn_failed(label, &source.to_string()))
                        .await;
                }
                return Err(err);
            }
        };

        let pid = task.pid();

        // If this fails we abort and leave the process running unattended.
        if let Err(err) = self.notifier.notify(&message::started(label, pid)).await {
            error!(
                label,
                pid,
                error = %err,
                "could not deliver start notification; task keeps running unmonitored"
            );
            return Err(err);
        }

        let exited = tokio::select! {
            biased;
            _ = shutdown.requested() => None,
            res = task.wait() => Some(res?),
        };

        let result = match exited {
            Some(result) => result,
            None => {
                info!(label, pid, "shutdown requested while task was running");
                let result = task.kill().await?;
                self.notify_best_effort(&message::for_result(label, &result))
                    .await;
                return Ok(result);
            }
        };

        if cancelled_during_exit(&result, &mut shutdown).await {
            info!(label, pid, "task exited while shutdown was requested");
            let result = RunResult {
                outcome: TaskOutcome::Cancelled,
                ..result
            };
            self.notify_best_effort(&message::for_result(label, &result))
                .await;
            return Ok(result);
        }

        self.notifier
            .notify(&message::for_result(label, &result))
            .await?;

        info!(label, pid, outcome = ?result.outcome, "task reported");
        Ok(result)
    }

    async fn notify_best_effort(&self, text: &str) {
        if let Err(err) = self.notifier.notify(text).await {
            warn!(error = %err, "best-effort notification failed");
        }
    }
}

/// Whether a process that has already exited should count as cancelled.
async fn cancelled_during_exit(result: &RunResult, shutdown: &mut Shutdown) -> bool {
    if shutdown.is_requested() {
        return true;
    }
    if !result.outcome.is_interrupt() {
        return false;
    }
    tokio::time::timeout(INTERRUPT_GRACE, shutdown.requested())
        .await
        .is_ok()
}
