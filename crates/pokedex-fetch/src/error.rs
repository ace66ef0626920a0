//! Error types for the record fetcher.
//!
//! None of these reach a view: the fetcher converts every [`FetchError`]
//! into fallback data or absence at its public boundary. They exist so the
//! transport layer can report what went wrong and the log can say so.

/// Errors produced while talking to the data service.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, or a placeholder when it could not be read.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Errors raised while reading fetcher configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set to a value that could not be parsed.
    #[error("invalid {name}: {reason}")]
    Invalid {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Parser message.
        reason: String,
    },

    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    Client(String),
}
