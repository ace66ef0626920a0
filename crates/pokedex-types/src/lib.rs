//! Shared type definitions for the Pokedex catalog viewer.
//!
//! Every crate in the workspace speaks these types: the fetcher builds
//! them, the views derive filtered and sorted projections of them, and the
//! CLI renders them. Types are exported to `TypeScript` via `ts-rs` so a
//! browser presentation layer can consume the same shapes.
//!
//! # Modules
//!
//! - [`ids`] -- The entry id newtype and fixed catalog bounds
//! - [`entry`] -- The catalog record and its nested attributes
//! - [`options`] -- Sort and filter controls owned by the views

pub mod entry;
pub mod ids;
pub mod options;

// Re-export all public types at crate root for convenience.
pub use entry::{CatalogEntry, EntryImages, Stat, StatKind, SummaryRef};
pub use ids::{CATALOG_SIZE, EntryId, FIRST_ENTRY_ID, LAST_ENTRY_ID};
pub use options::{FilterOption, SortDirection, SortField, SortOption};
