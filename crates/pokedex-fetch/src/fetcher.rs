//! The record fetcher: summary lists, single records, and batch detail
//! resolution, each degrading to the built-in fallback dataset.
//!
//! Nothing in this module returns an error to its caller. Transport
//! failures are logged and replaced by fallback data or absence:
//!
//! ```text
//! fetch_summary_list   --fail--> fallback summaries
//! fetch_by_id/by_name  --fail--> fallback lookup (or None)
//! fetch_details_for_list
//!     per-item None    --------> dropped from the output
//!     task failure     --------> full fallback dataset
//! ```

use std::future::Future;

use pokedex_types::{CatalogEntry, EntryId, SummaryRef};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, info, warn};

use crate::config::FetcherConfig;
use crate::error::{ConfigError, FetchError};
use crate::fallback::{fallback_by_id, fallback_by_name, fallback_entries, fallback_summaries};
use crate::transport::Transport;
use crate::wire::{ListResponse, WireRecord};

/// Client for the catalog data service.
///
/// Cheap to clone: the transport shares its connection pool or fixture
/// table between clones.
#[derive(Debug, Clone)]
pub struct Fetcher {
    transport: Transport,
    api_base_url: String,
}

impl Fetcher {
    /// Create a fetcher over an explicit transport.
    ///
    /// `api_base_url` is only used to synthesize fallback summary addresses.
    pub fn new(transport: Transport, api_base_url: impl Into<String>) -> Self {
        Self {
            transport,
            api_base_url: api_base_url.into(),
        }
    }

    /// Create a fetcher from configuration.
    pub fn from_config(config: &FetcherConfig) -> Result<Self, ConfigError> {
        let transport = Transport::from_config(config)?;
        info!(
            transport = transport.name(),
            api_base_url = config.api_base_url,
            "fetcher configured"
        );
        Ok(Self::new(transport, config.api_base_url.clone()))
    }

    /// The transport in use.
    pub const fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Request up to `limit` summary references.
    ///
    /// Any failure yields the fallback summaries instead.
    pub async fn fetch_summary_list(&self, limit: u32) -> Vec<SummaryRef> {
        let path = format!("/pokemon?limit={limit}");
        match self.get::<ListResponse>(&path).await {
            Ok(list) => {
                debug!(limit, returned = list.results.len(), "summary list fetched");
                list.results
            }
            Err(e) => {
                warn!(limit, error = %e, "summary list fetch failed, using fallback data");
                fallback_summaries(&self.api_base_url)
            }
        }
    }

    /// Request one full record by id.
    ///
    /// On failure the fallback record with the same id is returned, if any.
    /// `None` means there is no such entry.
    pub async fn fetch_by_id(&self, id: EntryId) -> Option<CatalogEntry> {
        let path = format!("/pokemon/{id}");
        match self.get::<WireRecord>(&path).await {
            Ok(record) => Some(CatalogEntry::from(record)),
            Err(e) => {
                warn!(%id, error = %e, "record fetch failed, using fallback data");
                fallback_by_id(id)
            }
        }
    }

    /// Request one full record by name, matched case-insensitively.
    pub async fn fetch_by_name(&self, name: &str) -> Option<CatalogEntry> {
        let wanted = name.trim().to_lowercase();
        let path = format!("/pokemon/{wanted}");
        match self.get::<WireRecord>(&path).await {
            Ok(record) => Some(CatalogEntry::from(record)),
            Err(e) => {
                warn!(name = wanted, error = %e, "record fetch failed, using fallback data");
                fallback_by_name(&wanted)
            }
        }
    }

    /// Resolve every summary reference to a full record, concurrently.
    ///
    /// Output keeps input order. References that resolve to absence,
    /// including ones whose address carries no numeric id, are dropped.
    /// If a resolution task itself fails, the whole fallback dataset is
    /// returned.
    pub async fn fetch_details_for_list(&self, refs: &[SummaryRef]) -> Vec<CatalogEntry> {
        let ids: Vec<Option<EntryId>> = refs
            .iter()
            .map(|summary| {
                let id = summary.entry_id();
                if id.is_none() {
                    warn!(name = summary.name, url = summary.url, "summary address has no id");
                }
                id
            })
            .collect();

        let fetcher = self.clone();
        let resolved = resolve_all(ids, move |id| {
            let fetcher = fetcher.clone();
            async move { fetcher.fetch_by_id(id).await }
        })
        .await;

        match resolved {
            Ok(entries) => {
                info!(requested = refs.len(), resolved = entries.len(), "details fetched");
                entries
            }
            Err(e) => {
                warn!(error = %e, "detail resolution failed, using fallback data");
                fallback_entries()
            }
        }
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let body = self.transport.get_json(path).await?;
        serde_json::from_value(body).map_err(|e| FetchError::Malformed(format!("{path}: {e}")))
    }
}

/// Run `resolve` for every id as its own task and collect the results.
///
/// All tasks are spawned before any is awaited. Results are placed back in
/// input order and absences are dropped. The first task failure aborts the
/// remaining tasks and is returned.
pub(crate) async fn resolve_all<F, Fut>(
    ids: Vec<Option<EntryId>>,
    resolve: F,
) -> Result<Vec<CatalogEntry>, JoinError>
where
    F: Fn(EntryId) -> Fut,
    Fut: Future<Output = Option<CatalogEntry>> + Send + 'static,
{
    let mut slots: Vec<Option<CatalogEntry>> = vec![None; ids.len()];
    let mut tasks = JoinSet::new();

    for (index, id) in ids.into_iter().enumerate() {
        if let Some(id) = id {
            let request = resolve(id);
            tasks.spawn(async move { (index, request.await) });
        }
    }

    while let Some(joined) = tasks.join_next().await {
        let (index, entry) = joined?;
        if let Some(slot) = slots.get_mut(index) {
            *slot = entry;
        }
    }

    Ok(slots.into_iter().flatten().collect())
}
