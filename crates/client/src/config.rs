//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ALMACEN_API_URL` - Base URL of the inventory backend
//!   (e.g., `https://almacen.example.com`)
//!
//! ## Optional
//! - `ALMACEN_API_TOKEN` - Bearer token attached to every request

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Inventory backend client configuration.
///
/// Implements `Debug` manually to redact the API token.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,
    /// Optional bearer token.
    pub api_token: Option<SecretString>,
}

impl ClientConfig {
    /// Create a configuration from explicit values.
    ///
    /// Trailing slashes on the base URL are trimmed so path joining stays
    /// predictable.
    #[must_use]
    pub fn new(base_url: &str, api_token: Option<SecretString>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
        }
    }

    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `ALMACEN_API_URL` is unset
    /// or [`ConfigError::InvalidEnvVar`] if it is empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("ALMACEN_API_URL")
            .map_err(|_| ConfigError::MissingEnvVar("ALMACEN_API_URL".to_string()))?;

        if base_url.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "ALMACEN_API_URL".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let api_token = std::env::var("ALMACEN_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty())
            .map(SecretString::from);

        Ok(Self::new(&base_url, api_token))
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_token",
                &self.api_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig::new("https://almacen.example.com/", None);
        assert_eq!(config.base_url, "https://almacen.example.com");
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::new(
            "https://almacen.example.com",
            Some(SecretString::from("super-secret")),
        );
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
