use std::fmt;

/// How the wrapped command is launched.
///
/// - `Shell`: the command tokens are joined and handed to the platform shell
///   (`sh -c` / `cmd /C`).
/// - `Script`: the first token is a script path passed, together with the
///   remaining tokens, to a script interpreter (`python3` by default).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Shell,
    Script,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Shell => f.write_str("shell"),
            Mode::Script => f.write_str("script"),
        }
    }
}

/// Exit code reported for a process killed by Ctrl-C: `-SIGINT` on unix,
/// `STATUS_CONTROL_C_EXIT` on Windows.
#[cfg(unix)]
pub const INTERRUPTED_EXIT_CODE: i32 = -2;
#[cfg(not(unix))]
pub const INTERRUPTED_EXIT_CODE: i32 = 0xC000_013Au32 as i32;

/// Outcome of the wrapped process as reported to the chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    Success,
    /// Non-zero exit. A process killed by a signal reports `-signum`.
    Failed(i32),
    /// The wrapper was asked to shut down and killed the process.
    Cancelled,
}

impl TaskOutcome {
    pub fn from_exit_code(code: i32) -> Self {
        if code == 0 {
            TaskOutcome::Success
        } else {
            TaskOutcome::Failed(code)
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TaskOutcome::Success)
    }

    /// Whether the process died from the interrupt a terminal Ctrl-C sends
    /// to the whole foreground process group.
    pub fn is_interrupt(&self) -> bool {
        *self == TaskOutcome::Failed(INTERRUPTED_EXIT_CODE)
    }
}
