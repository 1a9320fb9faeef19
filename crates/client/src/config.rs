//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ADDRESS_BOOK_SERVER_URL` - Base URL of the lookup server
//!   (default: `http://127.0.0.1:3000`)

use thiserror::Error;
use url::Url;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Lookup client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the lookup server
    pub server_url: Url,
}

impl ClientConfig {
    /// Create a configuration pointing at `server_url`.
    #[must_use]
    pub const fn new(server_url: Url) -> Self {
        Self { server_url }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the server URL cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw = std::env::var("ADDRESS_BOOK_SERVER_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self::parse(&raw)
    }

    /// Build a configuration from a server URL string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `raw` is not an absolute http(s) URL.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| {
            ConfigError::InvalidEnvVar("ADDRESS_BOOK_SERVER_URL".to_string(), reason)
        };

        let server_url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        if !matches!(server_url.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "unsupported scheme '{}'",
                server_url.scheme()
            )));
        }

        Ok(Self { server_url })
    }
}
