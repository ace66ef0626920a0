//! View state for the Pokedex catalog viewer.
//!
//! Three independent views, each owning its own load and controls:
//!
//! - [`list::ListView`] -- name search and sortable ordering
//! - [`gallery::GalleryView`] -- multi-select type filtering
//! - [`detail::DetailView`] -- one entry with prior/next navigation
//!
//! Loads run on spawned tasks wrapped in [`task::LoadTask`], which aborts
//! the work when the view drops it. Derived views are recomputed from the
//! loaded entries on every read and never written back.

pub mod detail;
pub mod display;
pub mod error;
pub mod gallery;
pub mod list;
pub mod state;
pub mod task;

pub use detail::{DetailState, DetailView};
pub use error::LoadError;
pub use gallery::GalleryView;
pub use list::{ListView, ResultCount};
pub use state::{CatalogLoad, LoadState};
pub use task::LoadTask;
