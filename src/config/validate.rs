// src/config/validate.rs

use std::time::Duration;

use crate::config::loader::{ENV_API_URL, ENV_BOT_TOKEN, ENV_CHAT_ID, ENV_HTTP_TIMEOUT};
use crate::config::model::{Config, DEFAULT_HTTP_TIMEOUT, RawConfig};
use crate::errors::{Result, TaskbotError};

impl TryFrom<RawConfig> for Config {
    type Error = TaskbotError;

    fn try_from(raw: RawConfig) -> std::result::Result<Self, Self::Error> {
        let bot_token = required(raw.bot_token, ENV_BOT_TOKEN)?;
        let chat_id = required(raw.chat_id, ENV_CHAT_ID)?;

        let mut config = Config::new_unchecked(bot_token, chat_id);

        if let Some(url) = raw.api_base_url {
            config = config.with_api_base_url(validate_api_url(&url)?);
        }
        if let Some(interpreter) = raw.interpreter {
            config.interpreter = interpreter.trim().to_string();
        }
        config.http_timeout = parse_timeout(raw.http_timeout_secs.as_deref())?;

        Ok(config)
    }
}

fn required(value: Option<String>, name: &str) -> Result<String> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| TaskbotError::Config(format!("{name} must be set")))?;

    if value.chars().any(char::is_whitespace) {
        return Err(TaskbotError::Config(format!(
            "{name} must not contain whitespace"
        )));
    }

    Ok(value)
}

fn validate_api_url(url: &str) -> Result<&str> {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url)
    } else {
        Err(TaskbotError::Config(format!(
            "{ENV_API_URL} must be an http(s) URL (got '{url}')"
        )))
    }
}

fn parse_timeout(raw: Option<&str>) -> Result<Duration> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_HTTP_TIMEOUT);
    };

    match raw.trim().parse::<u64>() {
        Ok(0) => Err(TaskbotError::Config(format!(
            "{ENV_HTTP_TIMEOUT} must be >= 1 (got 0)"
        ))),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(_) => Err(TaskbotError::Config(format!(
            "{ENV_HTTP_TIMEOUT} must be a whole number of seconds (got '{raw}')"
        ))),
    }
}
