//! Transport abstraction for the data service.
//!
//! Uses enum dispatch rather than a trait object, since async methods are
//! not dyn-compatible. The HTTP transport talks to the real service via
//! `reqwest`; the fixture transport serves canned JSON keyed by request
//! path and backs offline mode and tests.
//!
//! The transport only knows how to turn a path into JSON or an error. What
//! an error means for the caller is decided in [`crate::fetcher`].

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::FetcherConfig;
use crate::error::{ConfigError, FetchError};

// ---------------------------------------------------------------------------
// Unified transport enum
// ---------------------------------------------------------------------------

/// A way of issuing `GET` requests against the data service.
#[derive(Debug, Clone)]
pub enum Transport {
    /// Live HTTP requests.
    Http(HttpTransport),
    /// Canned responses.
    Fixture(FixtureTransport),
}

impl Transport {
    /// Build the transport described by the configuration.
    ///
    /// Offline mode yields an empty fixture transport, so every request
    /// fails and the fetcher serves its fallback data.
    pub fn from_config(config: &FetcherConfig) -> Result<Self, ConfigError> {
        if config.offline {
            return Ok(Self::Fixture(FixtureTransport::new()));
        }
        HttpTransport::new(config).map(Self::Http)
    }

    /// Fetch `path` (e.g. `/pokemon/25`) and decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on connection failure, a non-success status,
    /// or a body that is not JSON.
    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value, FetchError> {
        match self {
            Self::Http(transport) => transport.get_json(path).await,
            Self::Fixture(transport) => transport.get_json(path),
        }
    }

    /// Human-readable name for logging.
    pub const fn name(&self) -> &str {
        match self {
            Self::Http(_) => "http",
            Self::Fixture(_) => "fixture",
        }
    }
}

// ---------------------------------------------------------------------------
// HTTP transport
// ---------------------------------------------------------------------------

/// Transport that sends requests to `{api_base_url}{path}`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    api_base_url: String,
}

impl HttpTransport {
    /// Create an HTTP transport from configuration.
    pub fn new(config: &FetcherConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.clone(),
        })
    }

    async fn get_json(&self, path: &str) -> Result<serde_json::Value, FetchError> {
        let url = format!("{}{path}", self.api_base_url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Request(format!("GET {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(format!("GET {url}: {e}")))
    }
}

// ---------------------------------------------------------------------------
// Fixture transport
// ---------------------------------------------------------------------------

/// A canned reply for one path.
#[derive(Debug, Clone)]
pub enum FixtureResponse {
    /// Successful reply with this body.
    Json(serde_json::Value),
    /// Non-success reply with this status code.
    Status(u16),
}

/// Transport answering from an in-memory table of canned responses.
///
/// Paths without an entry fail like an unreachable host.
#[derive(Debug, Clone, Default)]
pub struct FixtureTransport {
    responses: Arc<BTreeMap<String, FixtureResponse>>,
}

impl FixtureTransport {
    /// An empty fixture: every request fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a successful JSON reply for `path`.
    #[must_use]
    pub fn with_json(self, path: impl Into<String>, body: serde_json::Value) -> Self {
        self.with_response(path, FixtureResponse::Json(body))
    }

    /// Add a non-success reply for `path`.
    #[must_use]
    pub fn with_status(self, path: impl Into<String>, status: u16) -> Self {
        self.with_response(path, FixtureResponse::Status(status))
    }

    fn with_response(self, path: impl Into<String>, response: FixtureResponse) -> Self {
        let mut responses = Arc::unwrap_or_clone(self.responses);
        responses.insert(path.into(), response);
        Self {
            responses: Arc::new(responses),
        }
    }

    fn get_json(&self, path: &str) -> Result<serde_json::Value, FetchError> {
        match self.responses.get(path) {
            Some(FixtureResponse::Json(body)) => Ok(body.clone()),
            Some(FixtureResponse::Status(status)) => Err(FetchError::Status {
                status: *status,
                body: String::new(),
            }),
            None => Err(FetchError::Request(format!("no route to {path}"))),
        }
    }
}
