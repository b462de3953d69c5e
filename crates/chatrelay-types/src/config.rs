//! Relay configuration types.
//!
//! `RelayConfig` is built once at process entry (file + CLI overrides) and
//! passed explicitly into the service layer. The API credential is not part of
//! this struct; it is resolved separately and held as a secret.

use serde::{Deserialize, Serialize};

/// Default generation model.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default Gemini API base URL.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Top-level configuration for the relay.
///
/// Loaded from `~/.chatrelay/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Model identifier sent to the generation API.
    #[serde(default = "default_model")]
    pub model: String,

    /// Interface the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server binds to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins. `["*"]` allows any origin.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Base URL of the generation API.
    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_gemini_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            gemini_base_url: default_gemini_base_url(),
        }
    }
}

impl RelayConfig {
    /// True when CORS should allow any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }

    /// `host:port` string suitable for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
