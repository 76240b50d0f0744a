/*
[INPUT]:  Error sources (HTTP transport, JSON codec, upstream payloads)
[OUTPUT]: Structured error types for the entire crate
[POS]:    Error handling layer - unified error types
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the panel adapter
#[derive(Error, Debug)]
pub enum PanelError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Panel reported an application-level error inside the JSON body
    #[error("panel API error: {message}")]
    Api { message: String },

    /// Serialization/deserialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response decoded but lacks the fields the action requires
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl PanelError {
    /// Create an API error from an upstream error message
    pub fn api(message: impl Into<String>) -> Self {
        PanelError::Api {
            message: message.into(),
        }
    }

    /// Check if the panel itself rejected the request (as opposed to a
    /// transport or codec failure)
    pub fn is_api_error(&self) -> bool {
        matches!(self, PanelError::Api { .. })
    }
}

/// Result type alias for panel operations
pub type Result<T> = std::result::Result<T, PanelError>;
