// src/config/loader.rs

use crate::config::model::{Config, RawConfig};
use crate::errors::Result;

pub const ENV_BOT_TOKEN: &str = "BOT_TOKEN";
pub const ENV_CHAT_ID: &str = "CHAT_ID";
pub const ENV_BOT_TOKEN_FALLBACK: &str = "TELEGRAM_BOT_TOKEN";
pub const ENV_CHAT_ID_FALLBACK: &str = "TELEGRAM_CHAT_ID";
pub const ENV_API_URL: &str = "TASKBOT_API_URL";
pub const ENV_INTERPRETER: &str = "TASKBOT_INTERPRETER";
pub const ENV_HTTP_TIMEOUT: &str = "TASKBOT_HTTP_TIMEOUT_SECS";

/// Collect the raw settings through `lookup`.
///
/// `BOT_TOKEN` / `CHAT_ID` win over their `TELEGRAM_*` fallbacks. Empty
/// values count as unset so the fallback still gets a chance.
pub fn read_raw<F>(lookup: F) -> RawConfig
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    RawConfig {
        bot_token: get(ENV_BOT_TOKEN).or_else(|| get(ENV_BOT_TOKEN_FALLBACK)),
        chat_id: get(ENV_CHAT_ID).or_else(|| get(ENV_CHAT_ID_FALLBACK)),
        api_base_url: get(ENV_API_URL),
        interpreter: get(ENV_INTERPRETER),
        http_timeout_secs: get(ENV_HTTP_TIMEOUT),
    }
}

/// Read and validate configuration from an arbitrary lookup.
pub fn load_from_lookup<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    Config::try_from(read_raw(lookup))
}

/// Read and validate configuration from the process environment.
///
/// This is the entry point used by the binary; call it once at startup.
pub fn load_from_env() -> Result<Config> {
    load_from_lookup(|key| std::env::var(key).ok())
}
