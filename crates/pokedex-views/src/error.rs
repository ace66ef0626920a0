//! Error types for view loads.

use tokio::task::JoinError;

/// Message shown when a list or gallery load fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load Pokemon data";

/// Message shown when a detail load fails.
pub const DETAIL_FAILED_MESSAGE: &str = "Failed to load Pokemon details";

/// Message shown when a detail load finds no entry.
pub const NOT_FOUND_MESSAGE: &str = "Pokemon not found";

/// Why a background load produced no result.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The load task was aborted before it finished.
    #[error("load cancelled")]
    Cancelled,

    /// The load task panicked.
    #[error("load task failed: {0}")]
    Panicked(String),
}

impl From<JoinError> for LoadError {
    fn from(error: JoinError) -> Self {
        if error.is_cancelled() {
            Self::Cancelled
        } else {
            Self::Panicked(error.to_string())
        }
    }
}
