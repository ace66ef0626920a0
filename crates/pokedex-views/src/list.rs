//! Searchable, sortable list view.
//!
//! The derived view is a pure function of the loaded entries, the search
//! text, and the sort option; it is recomputed on every read.

use std::cmp::Ordering;

use pokedex_fetch::Fetcher;
use pokedex_types::{CatalogEntry, SortDirection, SortField, SortOption};
use tracing::debug;

use crate::state::{CatalogLoad, LoadState};

/// Shown/total counts for the results header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultCount {
    /// Entries passing the current controls.
    pub shown: usize,
    /// Entries loaded.
    pub total: usize,
}

/// State of the list view.
#[derive(Debug)]
pub struct ListView {
    catalog: CatalogLoad,
    search: String,
    sort: SortOption,
}

impl ListView {
    /// Create a list view. Call [`ListView::load`] to populate it.
    pub const fn new(fetcher: Fetcher, limit: u32) -> Self {
        Self {
            catalog: CatalogLoad::new(fetcher, limit),
            search: String::new(),
            sort: SortOption {
                field: SortField::Name,
                direction: SortDirection::Asc,
            },
        }
    }

    /// Run the fetch sequence and wait for it.
    pub async fn load(&mut self) -> &LoadState<Vec<CatalogEntry>> {
        self.catalog.start();
        self.catalog.finish().await;
        self.catalog.state()
    }

    /// Re-run the load on the existing view state.
    ///
    /// Search text and sort option are kept.
    pub async fn retry(&mut self) -> &LoadState<Vec<CatalogEntry>> {
        self.load().await
    }

    /// The underlying catalog load, for callers driving it step by step.
    pub const fn catalog_mut(&mut self) -> &mut CatalogLoad {
        &mut self.catalog
    }

    /// Current load state.
    pub const fn state(&self) -> &LoadState<Vec<CatalogEntry>> {
        self.catalog.state()
    }

    /// Current search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace the search text.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Current sort option.
    pub const fn sort(&self) -> SortOption {
        self.sort
    }

    /// Replace the sort option outright.
    pub const fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    /// Click on the sort control for `field`.
    pub fn toggle_sort(&mut self, field: SortField) -> SortOption {
        self.sort = self.sort.toggled(field);
        debug!(
            field = self.sort.field.as_str(),
            direction = ?self.sort.direction,
            "sort changed"
        );
        self.sort
    }

    /// Entries matching the search, in sort order.
    pub fn visible(&self) -> Vec<&CatalogEntry> {
        let mut shown = filter_by_name(self.catalog.entries(), &self.search);
        sort_entries(&mut shown, self.sort);
        shown
    }

    /// Shown/total counts.
    pub fn result_count(&self) -> ResultCount {
        ResultCount {
            shown: self.visible().len(),
            total: self.catalog.entries().len(),
        }
    }
}

/// Entries whose name contains `query`, ignoring case.
pub fn filter_by_name<'a>(entries: &'a [CatalogEntry], query: &str) -> Vec<&'a CatalogEntry> {
    entries
        .iter()
        .filter(|entry| entry.name_contains(query))
        .collect()
}

/// Stable sort by the option's field and direction.
///
/// Descending reverses the comparator, so equal keys keep their input
/// order in both directions.
pub fn sort_entries(entries: &mut [&CatalogEntry], sort: SortOption) {
    entries.sort_by(|a, b| {
        let ordering = compare_by_field(a, b, sort.field);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_by_field(a: &CatalogEntry, b: &CatalogEntry, field: SortField) -> Ordering {
    match field {
        SortField::Name => compare_names(&a.name, &b.name),
        SortField::Id => a.id.cmp(&b.id),
        SortField::Height => a.height.cmp(&b.height),
        SortField::Weight => a.weight.cmp(&b.weight),
    }
}

/// Locale-style name comparison.
///
/// Letters compare case-insensitively first; on a tie lowercase sorts
/// before uppercase.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
