//! Startup settings: optional `catalog.toml` in the working directory, with
//! the `--server-url` flag taking precedence. No environment-variable layer.

use std::fs;

use client_core::config::DEFAULT_BASE_URL;
use serde::Deserialize;

const SETTINGS_FILE: &str = "catalog.toml";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server_url: String,
    pub request_timeout_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

pub fn load_settings(server_url_override: Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        match toml::from_str::<Settings>(&raw) {
            Ok(file_settings) => settings = file_settings,
            Err(err) => tracing::warn!(%err, "ignoring malformed {SETTINGS_FILE}"),
        }
    }

    if let Some(server_url) = server_url_override {
        settings.server_url = server_url;
    }

    settings
}
