//! Gateway error taxonomy.

use thiserror::Error;

/// Fallback shown when neither the server nor the transport produced a
/// usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "The operation could not be completed";

/// Errors that can occur when interacting with the inventory backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (no response received).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server rejected the request with a non-2xx status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unauthorized (invalid or missing API token).
    #[error("Unauthorized: invalid or missing API token")]
    Unauthorized,

    /// Failed to parse a response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// The message to surface to the user.
    ///
    /// Prefers the server-provided message verbatim, falls back to the
    /// transport error's own message, and finally to a generic string.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::NotFound(what) if !what.trim().is_empty() => what.clone(),
            Self::NotFound(_) => "Resource not found".to_string(),
            Self::Unauthorized => self.to_string(),
            Self::Http(e) => {
                let msg = e.to_string();
                if msg.trim().is_empty() {
                    GENERIC_ERROR_MESSAGE.to_string()
                } else {
                    msg
                }
            }
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}
