//! Failure taxonomy for framing and unframing wire messages.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FramingError {
    /// A complete message was expected but no header separator is present.
    #[error("Missing header separator in message")]
    MissingSeparator,

    /// The header before the separator does not carry a usable length.
    #[error("Invalid content length in header {header:?}")]
    InvalidContentLength { header: String },

    /// The message ends before the announced body length.
    #[error("Message body truncated: expected {expected} bytes, have {available}")]
    TruncatedBody { expected: usize, available: usize },

    /// The body is not the JSON object the protocol requires.
    #[error("Failed to parse message body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}
