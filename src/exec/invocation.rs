// src/exec/invocation.rs

//! The one task a taskbot process runs.

use tokio::process::Command;

use crate::config::model::DEFAULT_INTERPRETER;
use crate::errors::{Result, TaskbotError};
use crate::types::Mode;

/// What to run and what to call it.
///
/// Built once from the CLI and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    mode: Mode,
    label: String,
    command: Vec<String>,
    interpreter: String,
}

impl Invocation {
    /// Validate and build an invocation.
    ///
    /// Fails with [`TaskbotError::Usage`] if the label is blank or there is
    /// no command to run.
    pub fn new(mode: Mode, label: &str, command: Vec<String>) -> Result<Self> {
        let label = label.trim();
        if label.is_empty() {
            return Err(TaskbotError::Usage("task label must not be empty".to_string()));
        }

        match command.first() {
            None => {
                return Err(TaskbotError::Usage(format!(
                    "task '{label}' has no command to run"
                )));
            }
            Some(first) if first.trim().is_empty() => {
                return Err(TaskbotError::Usage(format!(
                    "task '{label}' has an empty command"
                )));
            }
            Some(_) => {}
        }

        Ok(Self {
            mode,
            label: label.to_string(),
            command,
            interpreter: DEFAULT_INTERPRETER.to_string(),
        })
    }

    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    /// The command line as a single string, for logs.
    pub fn display_command(&self) -> String {
        match self.mode {
            Mode::Shell => self.command.join(" "),
            Mode::Script => format!("{} {}", self.interpreter, self.command.join(" ")),
        }
    }

    /// Build the process command for this invocation.
    ///
    /// - Shell mode joins the tokens with spaces and runs them through the
    ///   platform shell.
    /// - Script mode runs the interpreter with the tokens as arguments.
    ///
    /// Stdio is inherited from taskbot.
    pub fn to_command(&self) -> Command {
        match self.mode {
            Mode::Shell => {
                let line = self.command.join(" ");
                if cfg!(windows) {
                    let mut c = Command::new("cmd");
                    c.arg("/C").arg(line);
                    c
                } else {
                    let mut c = Command::new("sh");
                    c.arg("-c").arg(line);
                    c
                }
            }
            Mode::Script => {
                let mut c = Command::new(&self.interpreter);
                c.args(&self.command);
                c
            }
        }
    }
}
