//! Error types for candela.

use thiserror::Error;

use crate::InstrumentError;

/// Result type alias for candela operations.
pub type Result<T> = std::result::Result<T, CandelaError>;

/// Errors that can occur while fetching and processing candle data.
#[derive(Error, Debug)]
pub enum CandelaError {
    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The exchange answered with a non-success HTTP status.
    #[error("Exchange returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The exchange answered with an error envelope.
    #[error("Exchange API error {code}: {msg}")]
    Api {
        /// Exchange error code.
        code: String,
        /// Exchange error message.
        msg: String,
    },

    /// Response data could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid instrument identifier.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    /// Aggregation failed.
    #[error("Aggregation error: {0}")]
    Aggregate(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
