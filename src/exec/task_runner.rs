// src/exec/task_runner.rs

//! Spawning and reaping the wrapped process.

use std::process::ExitStatus;
use std::time::{Duration, Instant};

use anyhow::Context;
use tokio::process::Child;
use tracing::{debug, info, warn};

use crate::errors::{Result, TaskbotError};
use crate::exec::Invocation;
use crate::types::TaskOutcome;

/// What happened to the wrapped process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    pub pid: u32,
    pub outcome: TaskOutcome,
    /// Wall-clock time from spawn to termination.
    pub elapsed: Duration,
}

/// A spawned child that has not been reaped yet.
///
/// Owns the child for its whole lifetime. `wait` is cancel safe, so it can
/// be raced against a shutdown signal and followed by `kill`.
#[derive(Debug)]
pub struct RunningTask {
    label: String,
    pid: u32,
    started: Instant,
    child: Child,
}

/// Spawn the process described by `invocation`.
///
/// The PID is captured immediately; the clock starts just before the spawn
/// so the measured duration never undercounts.
pub fn spawn(invocation: &Invocation) -> Result<RunningTask> {
    info!(
        label = %invocation.label(),
        mode = %invocation.mode(),
        cmd = %invocation.display_command(),
        "starting task process"
    );

    let started = Instant::now();
    let child = invocation
        .to_command()
        .spawn()
        .map_err(|source| TaskbotError::Spawn {
            label: invocation.label().to_string(),
            source,
        })?;

    // `id()` is only `None` once the child has been polled to completion.
    let pid = child.id().ok_or_else(|| {
        TaskbotError::Other(anyhow::anyhow!(
            "process for task '{}' exited before its PID could be read",
            invocation.label()
        ))
    })?;

    debug!(label = %invocation.label(), pid, "task process spawned");

    Ok(RunningTask {
        label: invocation.label().to_string(),
        pid,
        started,
        child,
    })
}

impl RunningTask {
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Block until the process exits and classify the outcome.
    ///
    /// Exit code 0 is success; anything else, including death by signal
    /// (reported as the negated signal number), is a failure.
    pub async fn wait(&mut self) -> Result<RunResult> {
        let status = self
            .child
            .wait()
            .await
            .with_context(|| format!("waiting for process of task '{}'", self.label))?;
        let elapsed = self.started.elapsed();

        let code = exit_code_of(&status);
        let outcome = TaskOutcome::from_exit_code(code);

        info!(
            label = %self.label,
            pid = self.pid,
            exit_code = code,
            success = outcome.is_success(),
            elapsed_secs = elapsed.as_secs_f64(),
            "task process exited"
        );

        Ok(RunResult {
            pid: self.pid,
            outcome,
            elapsed,
        })
    }

    /// Kill the process and reap it.
    pub async fn kill(&mut self) -> Result<RunResult> {
        info!(label = %self.label, pid = self.pid, "killing task process");

        if let Err(e) = self.child.kill().await {
            // Most likely it exited on its own in the meantime.
            warn!(
                label = %self.label,
                pid = self.pid,
                error = %e,
                "failed to kill task process"
            );
        }

        Ok(RunResult {
            pid: self.pid,
            outcome: TaskOutcome::Cancelled,
            elapsed: self.started.elapsed(),
        })
    }
}

/// The numeric code reported for a finished process.
///
/// Unix processes killed by a signal have no exit code; they are reported
/// as `-signum` (`-15` for SIGTERM). `-1` if neither is available.
pub fn exit_code_of(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    -1
}
