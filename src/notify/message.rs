// src/notify/message.rs

//! Chat message templates.
//!
//! Texts use Telegram's legacy Markdown: the label is bold and the PID is
//! monospace. Legacy Markdown has no escapes inside an entity, so labels go
//! through [`bold`] and only text outside entities through
//! [`escape_markdown`].

use std::time::Duration;

use crate::exec::RunResult;
use crate::types::TaskOutcome;

pub fn started(label: &str, pid: u32) -> String {
    format!("🚀 Started {} task with PID `{pid}`", bold(label))
}

pub fn completed(label: &str, elapsed: Duration) -> String {
    format!(
        "✅ {} completed in {}.",
        bold(label),
        format_elapsed(elapsed)
    )
}

pub fn interrupted(label: &str, exit_code: i32) -> String {
    format!(
        "⚠️ {} was interrupted. Exit code: {exit_code}",
        bold(label)
    )
}

pub fn cancelled(label: &str) -> String {
    format!("🛑 {} was cancelled.", bold(label))
}

pub fn spawn_failed(label: &str, error: &str) -> String {
    format!(
        "❌ {} failed to start: {}",
        bold(label),
        escape_markdown(error)
    )
}

/// Pick the template matching how the process ended.
pub fn for_result(label: &str, result: &RunResult) -> String {
    match result.outcome {
        TaskOutcome::Success => completed(label, result.elapsed),
        TaskOutcome::Failed(code) => interrupted(label, code),
        TaskOutcome::Cancelled => cancelled(label),
    }
}

/// Format a duration as zero-padded `HH:MM:SS`.
///
/// A partial second counts as a whole one, so the result is never shorter
/// than the duration itself. Hours keep growing past two digits.
pub fn format_elapsed(elapsed: Duration) -> String {
    let mut total = elapsed.as_secs();
    if elapsed.subsec_nanos() > 0 {
        total += 1;
    }

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Wrap `text` in a bold entity.
///
/// `_`, `` ` `` and `[` are literal inside the entity. A `*` would end it,
/// so the entity is closed, the star escaped, and the entity reopened:
/// `2*2` becomes `*2*\**2*`.
pub fn bold(text: &str) -> String {
    text.split('*')
        .map(|part| {
            if part.is_empty() {
                String::new()
            } else {
                format!("*{part}*")
            }
        })
        .collect::<Vec<_>>()
        .join("\\*")
}

/// Backslash-escape the characters legacy Markdown treats as entity markers.
///
/// Only valid outside an entity.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '_' | '*' | '`' | '[') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
