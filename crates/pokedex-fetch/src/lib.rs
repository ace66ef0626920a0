//! Record fetcher for the Pokedex catalog viewer.
//!
//! Talks to the public data service and turns its responses into
//! [`pokedex_types::CatalogEntry`] values. The fetcher never surfaces a
//! transport failure to its callers: it falls back to a small built-in
//! dataset, or reports absence when a single record cannot be found.
//!
//! # Modules
//!
//! - [`config`] -- Environment-driven configuration
//! - [`error`] -- Transport and configuration errors
//! - [`fallback`] -- The immutable built-in dataset
//! - [`fetcher`] -- Summary list, single record, and batch detail operations
//! - [`transport`] -- HTTP and fixture transports
//! - [`wire`] -- Service JSON shapes

pub mod config;
pub mod error;
pub mod fallback;
pub mod fetcher;
pub mod transport;
pub mod wire;

pub use config::{DEFAULT_API_BASE_URL, DEFAULT_LIST_LIMIT, FetcherConfig};
pub use error::{ConfigError, FetchError};
pub use fetcher::Fetcher;
pub use transport::{FixtureTransport, HttpTransport, Transport};
