// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`invocation`] holds the validated description of the one task to run
//!   and knows how to turn it into a `tokio::process::Command`.
//! - [`task_runner`] spawns that command, hands out its PID, and waits for
//!   (or kills) it.

pub mod invocation;
pub mod task_runner;

pub use invocation::Invocation;
pub use task_runner::{RunResult, RunningTask, spawn};
