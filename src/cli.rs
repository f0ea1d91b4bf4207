// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Two mutually exclusive forms:
//!
//! ```text
//! taskbot -p <TASK_LABEL> <SCRIPT_PATH> [SCRIPT_ARGS]...
//! taskbot -s <TASK_LABEL> <SHELL_COMMAND> [SHELL_ARGS]...
//! ```
//!
//! Everything after the label is taken verbatim as the command, including
//! tokens that look like flags, so `taskbot -p Build build.py --flag` passes
//! `--flag` to the script.

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgGroup, Parser, ValueEnum};

use crate::errors::Result;
use crate::exec::Invocation;
use crate::types::Mode;

/// Command-line arguments for `taskbot`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskbot",
    version,
    about = "Run a command and report its start and result to a Telegram chat.",
    long_about = None,
    group(ArgGroup::new("mode").required(true).args(["python", "shell"]))
)]
pub struct CliArgs {
    /// Run a script through the script interpreter.
    #[arg(short = 'p', long = "python")]
    pub python: bool,

    /// Run a command through the shell.
    #[arg(short = 's', long = "shell")]
    pub shell: bool,

    /// Interpreter used with `-p`.
    ///
    /// If omitted, `TASKBOT_INTERPRETER` or `python3` is used.
    #[arg(long, value_name = "PROG")]
    pub interpreter: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKBOT_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Human-readable task name used in every notification.
    #[arg(value_name = "TASK_LABEL", value_parser = NonEmptyStringValueParser::new())]
    pub label: String,

    /// Script path or shell command, followed by its arguments.
    #[arg(
        value_name = "COMMAND",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl CliArgs {
    pub fn mode(&self) -> Mode {
        if self.python { Mode::Script } else { Mode::Shell }
    }

    /// Build the immutable task invocation.
    ///
    /// Uses `--interpreter` if given, otherwise the built-in default; the
    /// caller may still swap in the configured interpreter.
    pub fn to_invocation(&self) -> Result<Invocation> {
        let invocation = Invocation::new(self.mode(), &self.label, self.command.clone())?;
        Ok(match &self.interpreter {
            Some(prog) => invocation.with_interpreter(prog.clone()),
            None => invocation,
        })
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
///
/// Exits with clap's usage error (status 2) on malformed input.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
