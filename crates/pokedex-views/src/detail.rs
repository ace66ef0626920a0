//! Single-entry detail view with prior/next navigation.
//!
//! Navigation is bounded by the fixed catalog constants, not by what was
//! loaded. A disabled control does nothing; it never issues a fetch for an
//! out-of-range id.

use std::future::Future;

use pokedex_fetch::Fetcher;
use pokedex_types::{CatalogEntry, EntryId};
use tracing::{debug, warn};

use crate::error::{DETAIL_FAILED_MESSAGE, NOT_FOUND_MESSAGE};
use crate::task::LoadTask;

/// Load status of the detail view.
///
/// `NotFound` and `Failed` render the same way but stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    /// Fetch in flight.
    Loading,
    /// The entry was found.
    Ready(Box<CatalogEntry>),
    /// The fetch completed without an entry.
    NotFound,
    /// The fetch itself failed.
    Failed,
}

impl DetailState {
    /// The loaded entry, if ready.
    pub fn entry(&self) -> Option<&CatalogEntry> {
        match self {
            Self::Ready(entry) => Some(entry.as_ref()),
            Self::Loading | Self::NotFound | Self::Failed => None,
        }
    }

    /// User-facing error text for the error states.
    pub const fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::NotFound => Some(NOT_FOUND_MESSAGE),
            Self::Failed => Some(DETAIL_FAILED_MESSAGE),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}

/// State of the detail view for one id.
#[derive(Debug)]
pub struct DetailView {
    fetcher: Fetcher,
    id: EntryId,
    state: DetailState,
    pending: Option<LoadTask<Option<CatalogEntry>>>,
}

impl DetailView {
    /// Create a detail view for `id`. Call [`DetailView::load`] to populate it.
    pub const fn new(fetcher: Fetcher, id: EntryId) -> Self {
        Self {
            fetcher,
            id,
            state: DetailState::Loading,
            pending: None,
        }
    }

    /// Id currently shown.
    pub const fn id(&self) -> EntryId {
        self.id
    }

    /// Current state.
    pub const fn state(&self) -> &DetailState {
        &self.state
    }

    /// Enter `Loading` and fetch the current id in the background.
    pub fn start_load(&mut self) {
        let fetcher = self.fetcher.clone();
        let id = self.id;
        self.start_with(async move { fetcher.fetch_by_id(id).await });
    }

    pub(crate) fn start_with<F>(&mut self, loader: F)
    where
        F: Future<Output = Option<CatalogEntry>> + Send + 'static,
    {
        self.state = DetailState::Loading;
        self.pending = Some(LoadTask::spawn(loader));
        debug!(id = %self.id, "detail load started");
    }

    /// Wait for the in-flight fetch and record its outcome.
    pub async fn finish_load(&mut self) -> &DetailState {
        if let Some(task) = self.pending.take() {
            self.state = match task.join().await {
                Ok(Some(entry)) => DetailState::Ready(Box::new(entry)),
                Ok(None) => {
                    debug!(id = %self.id, "entry not found");
                    DetailState::NotFound
                }
                Err(e) => {
                    warn!(id = %self.id, error = %e, "detail load failed");
                    DetailState::Failed
                }
            };
        }
        &self.state
    }

    /// Fetch the current id and wait for it.
    pub async fn load(&mut self) -> &DetailState {
        self.start_load();
        self.finish_load().await
    }

    /// Switch to another id. Re-enters `Loading` only when the id changes.
    pub fn set_id(&mut self, id: EntryId) {
        if id != self.id {
            self.id = id;
            self.start_load();
        }
    }

    /// Whether the "previous" control is enabled.
    pub fn can_go_previous(&self) -> bool {
        self.id.previous().is_some()
    }

    /// Whether the "next" control is enabled.
    pub fn can_go_next(&self) -> bool {
        self.id.next().is_some()
    }

    /// Navigate to the previous id. Returns the new id, or `None` when the
    /// control is disabled.
    pub fn go_previous(&mut self) -> Option<EntryId> {
        let target = self.id.previous()?;
        self.set_id(target);
        Some(target)
    }

    /// Navigate to the next id. Returns the new id, or `None` when the
    /// control is disabled.
    pub fn go_next(&mut self) -> Option<EntryId> {
        let target = self.id.next()?;
        self.set_id(target);
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use pokedex_types::{FIRST_ENTRY_ID, LAST_ENTRY_ID};

    use super::*;
    use crate::test_support::{exploding_load, offline_fetcher};

    #[tokio::test]
    async fn loads_fallback_entry_offline() {
        let mut view = DetailView::new(offline_fetcher(), EntryId(2));
        let state = view.load().await;
        assert_eq!(state.entry().map(|e| e.name.as_str()), Some("ivysaur"));
    }

    #[tokio::test]
    async fn absent_entry_is_not_found() {
        let mut view = DetailView::new(offline_fetcher(), EntryId(25));
        assert_eq!(view.load().await, &DetailState::NotFound);
        assert_eq!(view.state().error_message(), Some(NOT_FOUND_MESSAGE));
    }

    #[tokio::test]
    async fn task_failure_is_failed_not_missing() {
        let mut view = DetailView::new(offline_fetcher(), EntryId(1));
        view.start_with(exploding_load());
        assert_eq!(view.finish_load().await, &DetailState::Failed);
        assert_eq!(view.state().error_message(), Some(DETAIL_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn previous_then_next_returns_to_start() {
        let mut view = DetailView::new(offline_fetcher(), EntryId(2));
        assert_eq!(view.go_previous(), Some(EntryId(1)));
        view.finish_load().await;
        assert_eq!(view.state().entry().map(|e| e.id), Some(EntryId(1)));

        assert_eq!(view.go_next(), Some(EntryId(2)));
        view.finish_load().await;
        assert_eq!(view.id(), EntryId(2));
        assert_eq!(view.state().entry().map(|e| e.id), Some(EntryId(2)));
    }

    #[tokio::test]
    async fn previous_disabled_at_first_entry() {
        let mut view = DetailView::new(offline_fetcher(), FIRST_ENTRY_ID);
        view.load().await;
        assert!(!view.can_go_previous());
        assert!(view.can_go_next());
        assert_eq!(view.go_previous(), None);
        assert_eq!(view.id(), FIRST_ENTRY_ID);
        // No fetch was issued: the loaded entry is still shown.
        assert!(view.state().entry().is_some());
    }

    #[tokio::test]
    async fn next_disabled_at_last_entry() {
        let mut view = DetailView::new(offline_fetcher(), LAST_ENTRY_ID);
        assert!(!view.can_go_next());
        assert!(view.can_go_previous());
        assert_eq!(view.go_next(), None);
        assert_eq!(view.id(), LAST_ENTRY_ID);
    }

    #[tokio::test]
    async fn navigation_round_trip_inside_bounds() {
        for start in [2_u32, 75, 150] {
            let mut view = DetailView::new(offline_fetcher(), EntryId(start));
            view.go_previous();
            view.go_next();
            assert_eq!(view.id(), EntryId(start));
        }
    }

    #[tokio::test]
    async fn setting_same_id_keeps_state() {
        let mut view = DetailView::new(offline_fetcher(), EntryId(1));
        view.load().await;
        view.set_id(EntryId(1));
        assert!(view.state().entry().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn navigation_supersedes_a_slow_load() {
        let stale_finished = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stale_finished);
        let mut view = DetailView::new(offline_fetcher(), EntryId(1));
        view.start_with(async move {
            tokio::time::sleep(Duration::from_secs(30)).await;
            flag.store(true, Ordering::SeqCst);
            None::<CatalogEntry>
        });

        view.set_id(EntryId(2));
        let shown = view.finish_load().await.entry().map(|e| e.id);
        assert_eq!(shown, Some(EntryId(2)));

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert!(!stale_finished.load(Ordering::SeqCst));
        assert_eq!(view.state().entry().map(|e| e.id), Some(EntryId(2)));
    }
}
