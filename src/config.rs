use std::collections::HashMap;
use std::env;

use crate::account::REDIRECT_DELAY_MS;
use crate::notify::NOTIFICATION_DISPLAY_MS;
use crate::{csrf, platform};

/// Bundled defaults, used wherever no real environment exists (wasm, mobile).
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub csrf_token: Option<String>,
    pub notification_ms: u64,
    pub redirect_delay_ms: u64,
}

impl AppConfig {
    /// Environment first, bundled config second, then the page itself.
    pub fn load() -> Self {
        let bundled = parse_env_file(BUNDLED_CONFIG);
        Self::from_lookup(|key| {
            env::var(key)
                .ok()
                .or_else(|| bundled.get(key).cloned())
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base = lookup("CHAT_API_BASE")
            .filter(|value| !value.trim().is_empty())
            .or_else(platform::page_origin)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let csrf_token = csrf::resolve_token(
            platform::document_cookies().as_deref(),
            platform::meta_content(csrf::CSRF_META_NAME).as_deref(),
        )
        .or_else(|| lookup("CHAT_CSRF_TOKEN").filter(|value| !value.is_empty()));

        Self {
            api_base,
            csrf_token,
            notification_ms: millis(&lookup, "CHAT_NOTIFICATION_MS", NOTIFICATION_DISPLAY_MS),
            redirect_delay_ms: millis(&lookup, "CHAT_REDIRECT_DELAY_MS", REDIRECT_DELAY_MS),
        }
    }
}

fn millis(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("{key}={raw} is not a number of milliseconds, using {default}");
            default
        }),
        None => default,
    }
}

/// Parses `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_file(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}
