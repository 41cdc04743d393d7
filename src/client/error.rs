//! Error types for the series transport.

use thiserror::Error;

/// Errors that can occur while fetching from the series backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network connectivity error (DNS, connection refused, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the configured deadline.
    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    /// Backend returned a non-success status. `message` is the `error`
    /// field of the response body when one parses, otherwise the generic
    /// `HTTP error! status: <code>` string; it displays bare so the
    /// presenter's prefix composes the user-visible message.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// Success status but the body matches none of the contract shapes.
    #[error("Invalid response: {0}")]
    MalformedResponse(String),
}
