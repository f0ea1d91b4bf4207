// src/notify/mod.rs

//! Outbound status notifications.
//!
//! The monitor talks to a [`Notifier`] instead of a concrete HTTP client, so
//! tests can record messages without touching the network.
//!
//! - [`message`] renders the chat texts and the elapsed-time string.
//! - [`telegram`] is the production implementation on top of the Bot API.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;

pub mod message;
pub mod telegram;

pub use message::format_elapsed;
pub use telegram::TelegramNotifier;

/// Sends a single text message to the configured destination.
pub trait Notifier: Send + Sync {
    /// Deliver `text`. Failures are returned as-is; there is no retry.
    fn notify<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}
