//! Client error types

use thiserror::Error;

/// Fallback text when an error response carries no `message` field
pub const SERVER_ERROR_FALLBACK: &str = "server error";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (transport unreachable or malformed response)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server-reported failure with the server's message
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client-side validation error (never reaches the network)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// User-visible error text: the server's message verbatim when present,
    /// otherwise the underlying cause.
    pub fn message(&self) -> String {
        match self {
            ClientError::Server { message, .. } => message.clone(),
            ClientError::Http(e) => e.to_string(),
            ClientError::InvalidResponse(m) | ClientError::Validation(m) => m.clone(),
            ClientError::Serialization(e) => e.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
