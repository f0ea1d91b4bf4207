// src/config/model.rs

use std::fmt;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.telegram.org";
pub const DEFAULT_INTERPRETER: &str = "python3";
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration exactly as found in the environment.
///
/// Every field is optional here; [`Config::try_from`] decides what is
/// required and fills in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    pub api_base_url: Option<String>,
    pub interpreter: Option<String>,
    pub http_timeout_secs: Option<String>,
}

/// Validated configuration.
///
/// Built once in `main` and moved into the components that need it. There
/// is no global state.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub bot_token: String,
    pub chat_id: String,
    /// Base URL of the Bot API, without a trailing slash.
    pub api_base_url: String,
    /// Interpreter used for script mode.
    pub interpreter: String,
    pub http_timeout: Duration,
}

impl Config {
    /// Construct a config without validation. Used by `TryFrom<RawConfig>`
    /// after the checks have passed, and by tests.
    pub fn new_unchecked(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            interpreter: DEFAULT_INTERPRETER.to_string(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

// Hand-written so the token never ends up in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("api_base_url", &self.api_base_url)
            .field("interpreter", &self.interpreter)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}
