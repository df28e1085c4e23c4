//! Client errors.

use thiserror::Error;

/// Errors that can occur while talking to the API.
///
/// Logical API errors (a response without a `data` envelope) are not errors
/// at this level; they surface as [`crate::ApiResponse::Failure`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, DNS, TLS or timeout failure from the transport.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not valid JSON.
    #[error("invalid JSON response: {source}")]
    Decode {
        /// Underlying parse error.
        source: serde_json::Error,
        /// Leading bytes of the offending body.
        body: String,
    },

    /// Missing or invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl ClientError {
    /// Create a config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a decode error, keeping a truncated snapshot of the body.
    pub(crate) fn decode(source: serde_json::Error, body: &str) -> Self {
        let mut snippet = body.chars().take(256).collect::<String>();
        if snippet.len() < body.len() {
            snippet.push('…');
        }
        Self::Decode {
            source,
            body: snippet,
        }
    }

    /// Check if this error came from the network layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
