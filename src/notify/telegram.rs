// src/notify/telegram.rs

//! Telegram Bot API notifier.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::errors::{Result, TaskbotError};
use crate::notify::Notifier;

const USER_AGENT: &str = concat!("taskbot/", env!("CARGO_PKG_VERSION"));
const PARSE_MODE: &str = "Markdown";

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

/// The subset of the Bot API envelope we look at.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    error_code: Option<i64>,
}

/// Posts messages to one chat through `sendMessage`.
///
/// Credentials come from [`Config`] and are fixed for the lifetime of the
/// notifier.
pub struct TelegramNotifier {
    client: reqwest::Client,
    endpoint: String,
    chat_id: String,
}

impl fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `endpoint` embeds the token.
        f.debug_struct("TelegramNotifier")
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}

impl TelegramNotifier {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TaskbotError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/bot{}/sendMessage",
                config.api_base_url, config.bot_token
            ),
            chat_id: config.chat_id.clone(),
        })
    }

    async fn send(&self, text: &str) -> Result<()> {
        let body = SendMessage {
            chat_id: &self.chat_id,
            text,
            parse_mode: PARSE_MODE,
        };

        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();

        // The API answers with a JSON envelope for errors too; fall back to
        // the HTTP status if the body is something else.
        let envelope = response.json::<ApiResponse>().await.ok();

        match envelope {
            Some(ApiResponse { ok: true, .. }) if status.is_success() => {
                debug!(chat_id = %self.chat_id, "notification delivered");
                Ok(())
            }
            Some(ApiResponse {
                description,
                error_code,
                ..
            }) => Err(TaskbotError::Delivery(format!(
                "Telegram API error {}: {}",
                error_code.unwrap_or_else(|| i64::from(status.as_u16())),
                description.unwrap_or_else(|| "no description".to_string())
            ))),
            None => Err(TaskbotError::Delivery(format!(
                "unexpected response from Telegram API (HTTP {status})"
            ))),
        }
    }
}

impl Notifier for TelegramNotifier {
    fn notify<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(self.send(text))
    }
}
