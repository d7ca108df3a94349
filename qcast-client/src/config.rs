//! Client configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for [`crate::ApiClient`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Server origin, without the `/api` prefix.
    pub base_url: String,
    pub timeout_secs: u64,
    /// Accept self-signed certificates; development installs only.
    pub accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5150".to_string(),
            timeout_secs: 30,
            accept_invalid_certs: false,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `QCAST_BASE_URL`, `QCAST_TIMEOUT_SECS`, and
    /// `QCAST_ACCEPT_INVALID_CERTS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("QCAST_BASE_URL")
            && !url.trim().is_empty()
        {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(secs) =
            std::env::var("QCAST_TIMEOUT_SECS").ok().and_then(|raw| raw.trim().parse().ok())
        {
            config.timeout_secs = secs;
        }
        if let Some(flag) = parse_bool_var("QCAST_ACCEPT_INVALID_CERTS") {
            config.accept_invalid_certs = flag;
        }
        config
    }
}

/// Parse a boolean value from a raw string, accepting common env-style forms.
///
/// Accepted truthy values (case-insensitive): `"1"`, `"true"`, `"yes"`, `"on"`.
/// Accepted falsy values: `"0"`, `"false"`, `"no"`, `"off"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_bool_var(name: &str) -> Option<bool> {
    std::env::var(name).ok().and_then(|raw| parse_bool(&raw))
}
