//! Mock implementations of service traits for testing

use super::traits::{ConfigProvider, FetchService};
use crate::config::SourceKind;
use crate::core::{FetchError, FetchResult};
use crate::fetch::Convention;
use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock configuration provider for testing
///
/// # Example
///
/// ```
/// use roster::config::SourceKind;
/// use roster::di::mocks::MockConfigProvider;
/// use roster::di::ConfigProvider;
///
/// let mut config = MockConfigProvider::default();
/// config.source = SourceKind::Fixture;
///
/// assert_eq!(config.source(), SourceKind::Fixture);
/// ```
#[derive(Clone)]
pub struct MockConfigProvider {
    pub users_url: String,
    pub source: SourceKind,
    pub fixture_path: Option<PathBuf>,
    pub convention: Convention,
    pub user_agent: String,
}

impl Default for MockConfigProvider {
    fn default() -> Self {
        Self {
            users_url: "http://127.0.0.1:9/users".to_string(),
            source: SourceKind::Network,
            fixture_path: None,
            convention: Convention::Async,
            user_agent: "roster-test".to_string(),
        }
    }
}

impl ConfigProvider for MockConfigProvider {
    fn users_url(&self) -> &str {
        &self.users_url
    }

    fn source(&self) -> SourceKind {
        self.source
    }

    fn fixture_path(&self) -> Option<&Path> {
        self.fixture_path.as_deref()
    }

    fn convention(&self) -> Convention {
        self.convention
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Mock fetch service for testing
///
/// Serves one scripted outcome for every call and records how often it was
/// asked, which makes laziness and idempotence observable.
///
/// # Example
///
/// ```
/// use roster::di::mocks::MockFetchService;
/// use roster::fetch::Fetcher;
/// use std::sync::Arc;
///
/// # async fn example() {
/// let service = Arc::new(MockFetchService::with_body("[1, 2, 3]"));
/// let fetcher = Fetcher::new(service.clone());
///
/// let numbers: Vec<u32> = fetcher.fetch("anything").await.unwrap();
/// assert_eq!(numbers, vec![1, 2, 3]);
/// assert_eq!(service.calls(), 1);
/// # }
/// ```
pub struct MockFetchService {
    outcome: FetchResult<Bytes>,
    calls: AtomicUsize,
    last_locator: Mutex<Option<String>>,
}

impl MockFetchService {
    /// Serve `body` as a successful payload
    pub fn with_body(body: impl Into<Bytes>) -> Self {
        Self::with_outcome(Ok(body.into()))
    }

    /// Fail every call with `error`
    pub fn with_error(error: FetchError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: FetchResult<Bytes>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_locator: Mutex::new(None),
        }
    }

    /// Number of times `acquire` has been called
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Locator passed to the most recent call
    pub fn last_locator(&self) -> Option<String> {
        self.last_locator.lock().unwrap().clone()
    }
}

#[async_trait]
impl FetchService for MockFetchService {
    fn name(&self) -> &str {
        "mock"
    }

    async fn acquire(&self, locator: &str) -> FetchResult<Bytes> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_locator.lock().unwrap() = Some(locator.to_string());
        self.outcome.clone()
    }
}
