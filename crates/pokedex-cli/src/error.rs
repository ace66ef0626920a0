//! Error types for the `pokedex` binary.

use pokedex_types::EntryId;

/// Top-level error for the binary.
///
/// Fetch problems never show up here: the fetcher absorbs them. What is
/// left are configuration mistakes, output failures, and views that ended
/// in an error state.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: pokedex_fetch::ConfigError,
    },

    /// Writing output failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A list or gallery load ended in the failed state.
    #[error("{0}")]
    LoadFailed(String),

    /// The requested entry does not exist.
    #[error("no entry for {0}")]
    NotFound(String),

    /// The requested id is outside the catalog.
    #[error("id {0} is outside the catalog")]
    OutOfRange(EntryId),
}
