// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod monitor;
pub mod notify;
pub mod shutdown;
pub mod types;

use tracing::{debug, warn};

use crate::cli::CliArgs;
use crate::errors::Result;
use crate::exec::RunResult;
use crate::monitor::Monitor;
use crate::notify::TelegramNotifier;
use crate::shutdown::Shutdown;
use crate::types::TaskOutcome;

/// Exit status used when the task was cancelled with Ctrl-C.
pub const EXIT_CANCELLED: i32 = 130;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the task invocation built from the CLI (validated first, so a usage
///   error wins over a configuration error)
/// - config loading (once, from the environment)
/// - the Telegram notifier
/// - Ctrl-C handling, installed before anything is spawned
pub async fn run(args: CliArgs) -> Result<RunResult> {
    let invocation = args.to_invocation()?;

    let config = config::load_from_env()?;
    debug!(?config, "configuration loaded");

    let invocation = if args.interpreter.is_none() {
        invocation.with_interpreter(config.interpreter.clone())
    } else {
        invocation
    };

    let notifier = TelegramNotifier::new(&config)?;
    let monitor = Monitor::new(notifier);

    let shutdown = shutdown::listen_for_ctrl_c().unwrap_or_else(|e| {
        warn!(error = %e, "failed to listen for Ctrl+C; cancellation disabled");
        Shutdown::never()
    });

    monitor.run_until(&invocation, shutdown).await
}

/// Exit status of taskbot itself once the task has been reported.
///
/// The wrapped command's own exit code only appears in the chat message.
pub fn exit_code(result: &RunResult) -> i32 {
    match result.outcome {
        TaskOutcome::Cancelled => EXIT_CANCELLED,
        TaskOutcome::Success | TaskOutcome::Failed(_) => 0,
    }
}
