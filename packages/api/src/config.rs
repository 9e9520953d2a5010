//! # Client configuration (`markassist.toml`)
//!
//! Where the backend lives and how the billing hand-off behaves. The web binary
//! embeds the file at compile time; a missing section or key falls back to the
//! production default, so an empty file is a valid configuration.
//!
//! ## Structure
//!
//! ```toml
//! [backend]
//! base_url = "https://my-fastapi-service-608954479960.us-central1.run.app"
//! request_timeout_secs = 60   # native targets only; 0 disables
//!
//! [billing]
//! recharge_url = "https://example.com/billing"
//! refresh_delay_ms = 2000     # credit re-fetch after opening the recharge page
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://my-fastapi-service-608954479960.us-central1.run.app";
const DEFAULT_RECHARGE_URL: &str = "https://example.com/billing";

/// Top-level configuration stored in `markassist.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub billing: BillingConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Origin every request is sent to. Credentials (cookies) are included.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BillingConfig {
    #[serde(default = "default_recharge_url")]
    pub recharge_url: String,
    #[serde(default = "default_refresh_delay")]
    pub refresh_delay_ms: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    60
}

fn default_recharge_url() -> String {
    DEFAULT_RECHARGE_URL.to_string()
}

fn default_refresh_delay() -> u32 {
    2000
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            recharge_url: default_recharge_url(),
            refresh_delay_ms: default_refresh_delay(),
        }
    }
}

impl BackendConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

impl ClientConfig {
    /// Builder method to point at a different backend origin.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.backend.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "markassist.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse an embedded config, falling back to defaults when it is invalid, then
    /// apply a base URL override (typically a build-time environment variable).
    pub fn load(source: &str, base_url_override: Option<&str>) -> Self {
        let config = Self::from_toml(source).unwrap_or_else(|e| {
            tracing::warn!("Invalid {}; using defaults: {e}", Self::filename());
            Self::default()
        });
        match base_url_override.map(str::trim).filter(|s| !s.is_empty()) {
            Some(url) => config.with_base_url(url),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.backend.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.billing.refresh_delay_ms, 2000);
    }

    #[test]
    fn test_partial_sections() {
        let config = ClientConfig::from_toml(
            r#"
            [backend]
            base_url = "http://localhost:8000"
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert_eq!(config.backend.request_timeout_secs, 60);
        assert_eq!(config.billing, BillingConfig::default());
    }

    #[test]
    fn test_load_applies_override_and_tolerates_garbage() {
        let config = ClientConfig::load("[backend", Some("http://127.0.0.1:9000"));
        assert_eq!(config.backend.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.billing, BillingConfig::default());

        let config = ClientConfig::load("", Some("  "));
        assert_eq!(config.backend.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_zero_timeout_disables() {
        let mut backend = BackendConfig::default();
        assert_eq!(backend.request_timeout(), Some(Duration::from_secs(60)));
        backend.request_timeout_secs = 0;
        assert!(backend.request_timeout().is_none());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default().with_base_url("http://api.test");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
