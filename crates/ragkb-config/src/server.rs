//! Backend server connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    String::from("http://localhost:8000")
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("ragkb/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Base URL of the RAG backend (e.g., `http://localhost:8000`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token (JWT) sent on every API request. Empty means anonymous.
    #[serde(default)]
    pub token: String,

    /// Timeout for API calls, in seconds. Direct object-storage uploads are
    /// not time-limited.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `User-Agent` header value.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ServerConfig {
    /// Check if the server section has the minimum required fields.
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }

    /// The bearer token, or `None` when no token is configured.
    pub fn bearer_token(&self) -> Option<&str> {
        let token = self.token.trim();
        (!token.is_empty()).then_some(token)
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject values the HTTP transport cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when `base_url` is empty and
    /// [`ConfigError::InvalidValue`] for a non-HTTP scheme or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::Missing {
                field: "server.base_url",
            });
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "server.base_url",
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
