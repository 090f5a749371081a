use crate::core::{FetchError, FetchResult, RosterError, RosterResult};
use crate::di::FetchService;
use crate::fetch::pipeline::{check_status, describe};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Url};
use tracing::debug;

/// Fetch service that issues one HTTP GET per call
///
/// No timeout and no retries are configured. Connection pooling is left to
/// the underlying `reqwest::Client`, which is cheap to clone and safe to share.
#[derive(Clone, Default)]
pub struct NetworkFetchService {
    client: Client,
}

impl NetworkFetchService {
    /// Create a new network service with a default HTTP client
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a network service that sends the given `User-Agent`
    pub fn with_user_agent(user_agent: &str) -> RosterResult<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| RosterError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Wrap an already configured HTTP client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

/// Parse a locator into an absolute http(s) URL
pub fn resolve_locator(locator: &str) -> FetchResult<Url> {
    let url = Url::parse(locator.trim()).map_err(|e| {
        debug!(locator, error = %e, "locator did not parse as a URL");
        FetchError::InvalidLocator
    })?;

    let is_http = matches!(url.scheme(), "http" | "https");
    if is_http && url.host_str().is_some_and(|h| !h.is_empty()) {
        Ok(url)
    } else {
        debug!(locator, scheme = url.scheme(), "locator is not an http(s) URL");
        Err(FetchError::InvalidLocator)
    }
}

#[async_trait]
impl FetchService for NetworkFetchService {
    fn name(&self) -> &str {
        "network"
    }

    async fn acquire(&self, locator: &str) -> FetchResult<Bytes> {
        let url = resolve_locator(locator)?;

        debug!(%url, "sending GET request");
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            let diagnostic = describe(&e);
            debug!(%url, error = %diagnostic, "request failed before a response arrived");
            FetchError::TransportFailure(diagnostic)
        })?;

        let status = response.status().as_u16();
        debug!(%url, status, "received response");
        check_status(status).inspect_err(|_| {
            debug!(%url, status, "response status outside the success range");
        })?;

        let body = response.bytes().await.map_err(|e| {
            let diagnostic = describe(&e);
            debug!(%url, error = %diagnostic, "failed to read response body");
            FetchError::TransportFailure(diagnostic)
        })?;

        debug!(%url, bytes = body.len(), "response body read");
        Ok(body)
    }
}
