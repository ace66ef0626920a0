//! The `Loading -> Ready | Failed` state machine shared by the list and
//! gallery views.

use std::future::Future;

use pokedex_fetch::Fetcher;
use pokedex_types::CatalogEntry;
use tracing::{debug, warn};

use crate::error::LOAD_FAILED_MESSAGE;
use crate::task::{LoadTask, load_catalog};

/// Load status of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// A load is in flight (or has not been started yet).
    Loading,
    /// The load finished.
    Ready(T),
    /// The load failed; the message is fit for display.
    Failed {
        /// User-facing description.
        message: String,
    },
}

impl<T> LoadState<T> {
    /// The loaded value, if ready.
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Failed { .. } => None,
        }
    }

    /// The failure message, if failed.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}

/// Catalog load owned by one view.
///
/// Each view holds its own instance, so views never share fetched data.
#[derive(Debug)]
pub struct CatalogLoad {
    fetcher: Fetcher,
    limit: u32,
    state: LoadState<Vec<CatalogEntry>>,
    pending: Option<LoadTask<Vec<CatalogEntry>>>,
}

impl CatalogLoad {
    /// Create an idle load in the `Loading` state.
    pub const fn new(fetcher: Fetcher, limit: u32) -> Self {
        Self {
            fetcher,
            limit,
            state: LoadState::Loading,
            pending: None,
        }
    }

    /// Current state.
    pub const fn state(&self) -> &LoadState<Vec<CatalogEntry>> {
        &self.state
    }

    /// The loaded entries, or an empty slice when not ready.
    pub fn entries(&self) -> &[CatalogEntry] {
        self.state.ready().map(Vec::as_slice).unwrap_or_default()
    }

    /// Enter `Loading` and start the fetch sequence in the background.
    ///
    /// A load already in flight is aborted.
    pub fn start(&mut self) {
        let fetcher = self.fetcher.clone();
        let limit = self.limit;
        self.start_with(load_catalog(fetcher, limit));
    }

    /// Enter `Loading` and run an arbitrary loader.
    pub(crate) fn start_with<F>(&mut self, loader: F)
    where
        F: Future<Output = Vec<CatalogEntry>> + Send + 'static,
    {
        self.state = LoadState::Loading;
        self.pending = Some(LoadTask::spawn(loader));
        debug!(limit = self.limit, "catalog load started");
    }

    /// Wait for the in-flight load and record its outcome.
    ///
    /// Returns `true` when this call moved the state to `Ready`. Without a
    /// load in flight nothing changes.
    pub async fn finish(&mut self) -> bool {
        let Some(task) = self.pending.take() else {
            return false;
        };
        match task.join().await {
            Ok(entries) => {
                debug!(entries = entries.len(), "catalog load ready");
                self.state = LoadState::Ready(entries);
                true
            }
            Err(e) => {
                warn!(error = %e, "catalog load failed");
                self.state = LoadState::Failed {
                    message: LOAD_FAILED_MESSAGE.to_owned(),
                };
                false
            }
        }
    }
}
