//! Configuration for the record fetcher.
//!
//! All configuration is loaded from environment variables. The fetcher only
//! needs to know where the data service lives, how many entries make up the
//! catalog, and whether to skip the network entirely.

use std::time::Duration;

use crate::error::ConfigError;

/// Default data service base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default number of summary references requested by the list views.
pub const DEFAULT_LIST_LIMIT: u32 = 151;

/// Complete fetcher configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// Data service base URL without a trailing slash.
    pub api_base_url: String,
    /// Number of summary references requested per load.
    pub list_limit: u32,
    /// When true, no request leaves the process and every call is served
    /// from the built-in fallback data.
    pub offline: bool,
    /// Per-request timeout. `None` leaves failure detection to the transport.
    pub request_timeout: Option<Duration>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            list_limit: DEFAULT_LIST_LIMIT,
            offline: false,
            request_timeout: None,
        }
    }
}

impl FetcherConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `POKEDEX_API_BASE_URL` -- data service base URL (default `https://pokeapi.co/api/v2`)
    /// - `POKEDEX_LIST_LIMIT` -- summary references per load (default 151)
    /// - `POKEDEX_OFFLINE` -- serve everything from fallback data (default `false`)
    /// - `POKEDEX_REQUEST_TIMEOUT_MS` -- per-request timeout in milliseconds (default none)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = lookup("POKEDEX_API_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());

        let list_limit: u32 = lookup("POKEDEX_LIST_LIMIT")
            .unwrap_or_else(|| DEFAULT_LIST_LIMIT.to_string())
            .trim()
            .parse()
            .map_err(|e| invalid("POKEDEX_LIST_LIMIT", &e))?;

        let offline: bool = lookup("POKEDEX_OFFLINE")
            .unwrap_or_else(|| "false".to_owned())
            .trim()
            .to_lowercase()
            .parse()
            .map_err(|e| invalid("POKEDEX_OFFLINE", &e))?;

        let request_timeout = lookup("POKEDEX_REQUEST_TIMEOUT_MS")
            .map(|raw| raw.trim().parse::<u64>())
            .transpose()
            .map_err(|e| invalid("POKEDEX_REQUEST_TIMEOUT_MS", &e))?
            .map(Duration::from_millis);

        Ok(Self {
            api_base_url,
            list_limit,
            offline,
            request_timeout,
        })
    }
}

fn invalid(name: &'static str, error: &dyn std::fmt::Display) -> ConfigError {
    ConfigError::Invalid {
        name,
        reason: error.to_string(),
    }
}
