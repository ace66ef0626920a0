//! Cancellable background loads.
//!
//! A [`LoadTask`] owns a spawned tokio task. Dropping the handle aborts the
//! task, so a view that is torn down (or that starts a newer load) never
//! receives a stale result.

use std::future::Future;

use pokedex_fetch::Fetcher;
use pokedex_types::CatalogEntry;
use tokio::task::JoinHandle;

use crate::error::LoadError;

/// Handle to an in-flight load. Aborts the load when dropped.
#[derive(Debug)]
pub struct LoadTask<T> {
    handle: Option<JoinHandle<T>>,
}

impl<T: Send + 'static> LoadTask<T> {
    /// Spawn `future` on the current runtime.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            handle: Some(tokio::spawn(future)),
        }
    }

    /// Wait for the load to finish.
    ///
    /// If this future is dropped before completion the load is aborted.
    pub async fn join(mut self) -> Result<T, LoadError> {
        let Some(handle) = self.handle.as_mut() else {
            return Err(LoadError::Cancelled);
        };
        let result = handle.await;
        self.handle = None;
        result.map_err(LoadError::from)
    }

    /// Abort the load now.
    pub fn abort(&self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

impl<T> Drop for LoadTask<T> {
    fn drop(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

/// The list and gallery fetch sequence: summary list, then details.
pub async fn load_catalog(fetcher: Fetcher, limit: u32) -> Vec<CatalogEntry> {
    let summaries = fetcher.fetch_summary_list(limit).await;
    fetcher.fetch_details_for_list(&summaries).await
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::test_support::offline_fetcher;

    #[tokio::test]
    async fn join_returns_output() {
        let task = LoadTask::spawn(async { 7_u32 });
        assert_eq!(task.join().await.ok(), Some(7));
    }

    #[tokio::test]
    async fn panic_becomes_load_error() {
        let task: LoadTask<u32> = LoadTask::spawn(async { panic!("service exploded") });
        assert!(matches!(task.join().await, Err(LoadError::Panicked(_))));
    }

    #[tokio::test]
    async fn abort_becomes_cancelled() {
        let task = LoadTask::spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            1_u32
        });
        task.abort();
        assert!(matches!(task.join().await, Err(LoadError::Cancelled)));
    }

    #[tokio::test(start_paused = true)]
    async fn drop_aborts_the_task() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&finished);
        let task = LoadTask::spawn(async move {
            tokio::time::sleep(Duration::from_secs(5)).await;
            flag.store(true, Ordering::SeqCst);
        });
        drop(task);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(!finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn offline_catalog_load_serves_fallback() {
        let entries = load_catalog(offline_fetcher(), 151).await;
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["bulbasaur", "ivysaur"]);
    }
}
