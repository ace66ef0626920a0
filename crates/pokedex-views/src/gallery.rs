//! Type-filterable gallery view.
//!
//! The set of type tags is derived once per successful load. Selecting
//! tags narrows the gallery to entries carrying at least one of them.

use std::collections::BTreeSet;

use pokedex_fetch::Fetcher;
use pokedex_types::{CatalogEntry, FilterOption};
use tracing::debug;

use crate::state::{CatalogLoad, LoadState};

/// State of the gallery view.
#[derive(Debug)]
pub struct GalleryView {
    catalog: CatalogLoad,
    filters: Vec<FilterOption>,
}

impl GalleryView {
    /// Create a gallery view. Call [`GalleryView::load`] to populate it.
    pub const fn new(fetcher: Fetcher, limit: u32) -> Self {
        Self {
            catalog: CatalogLoad::new(fetcher, limit),
            filters: Vec::new(),
        }
    }

    /// Run the fetch sequence, wait for it, and derive the type filters.
    pub async fn load(&mut self) -> &LoadState<Vec<CatalogEntry>> {
        self.catalog.start();
        self.finish_load().await;
        self.catalog.state()
    }

    /// Re-run the load on the existing view state.
    pub async fn retry(&mut self) -> &LoadState<Vec<CatalogEntry>> {
        self.load().await
    }

    /// The underlying catalog load, for callers driving it step by step.
    pub const fn catalog_mut(&mut self) -> &mut CatalogLoad {
        &mut self.catalog
    }

    /// Wait for a load started through [`GalleryView::catalog_mut`].
    ///
    /// A failed load drops the filters along with the entries they came from.
    pub async fn finish_load(&mut self) {
        if self.catalog.finish().await {
            self.filters = derive_type_filters(self.catalog.entries());
            debug!(types = self.filters.len(), "type filters derived");
        } else if self.catalog.state().failure_message().is_some() {
            self.filters.clear();
        }
    }

    /// Current load state.
    pub const fn state(&self) -> &LoadState<Vec<CatalogEntry>> {
        self.catalog.state()
    }

    /// All type filters, alphabetical.
    pub fn filters(&self) -> &[FilterOption] {
        &self.filters
    }

    /// Flip the selection of one tag. Unknown tags are ignored.
    pub fn toggle(&mut self, type_name: &str) {
        if let Some(filter) = self.filters.iter_mut().find(|f| f.type_name == type_name) {
            filter.selected = !filter.selected;
        }
    }

    /// Select one tag. Returns `false` when the tag is unknown.
    pub fn select(&mut self, type_name: &str) -> bool {
        match self.filters.iter_mut().find(|f| f.type_name == type_name) {
            Some(filter) => {
                filter.selected = true;
                true
            }
            None => false,
        }
    }

    /// Select every tag.
    pub fn select_all(&mut self) {
        self.set_all(true);
    }

    /// Deselect every tag.
    pub fn clear_all(&mut self) {
        self.set_all(false);
    }

    fn set_all(&mut self, selected: bool) {
        for filter in &mut self.filters {
            filter.selected = selected;
        }
    }

    /// Names of the selected tags.
    pub fn selected_types(&self) -> BTreeSet<&str> {
        self.filters
            .iter()
            .filter(|f| f.selected)
            .map(|f| f.type_name.as_str())
            .collect()
    }

    /// Entries passing the current selection, in load order.
    pub fn visible(&self) -> Vec<&CatalogEntry> {
        filter_by_types(self.catalog.entries(), &self.selected_types())
    }
}

/// Distinct type names across `entries`, sorted, all unselected.
pub fn derive_type_filters(entries: &[CatalogEntry]) -> Vec<FilterOption> {
    entries
        .iter()
        .flat_map(|entry| entry.types.iter().map(String::as_str))
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(FilterOption::unselected)
        .collect()
}

/// Entries carrying at least one selected type. An empty selection keeps
/// everything.
pub fn filter_by_types<'a>(
    entries: &'a [CatalogEntry],
    selected: &BTreeSet<&str>,
) -> Vec<&'a CatalogEntry> {
    if selected.is_empty() {
        return entries.iter().collect();
    }
    entries
        .iter()
        .filter(|entry| selected.iter().any(|t| entry.has_type(t)))
        .collect()
}
