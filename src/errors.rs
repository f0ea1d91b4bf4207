// src/errors.rs

//! Crate-wide error type and exit-code mapping.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Failed to start task '{label}': {source}")]
    Spawn {
        label: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Notification delivery failed: {0}")]
    Delivery(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TaskbotError {
    /// Process exit code the front-end uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            TaskbotError::Usage(_) => 2,
            TaskbotError::Config(_) => 3,
            TaskbotError::Spawn { .. } => 4,
            TaskbotError::Delivery(_) => 5,
            TaskbotError::Other(_) => 1,
        }
    }
}

impl From<reqwest::Error> for TaskbotError {
    fn from(err: reqwest::Error) -> Self {
        // Strip the URL: it embeds the bot token.
        TaskbotError::Delivery(err.without_url().to_string())
    }
}

pub type Result<T> = std::result::Result<T, TaskbotError>;
