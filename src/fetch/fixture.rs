use crate::core::path::fixture_in;
use crate::core::{FetchError, FetchResult};
use crate::di::FetchService;
use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Copy of `fixtures/users.json` compiled into the binary
static BUNDLED_USERS: &[u8] = include_bytes!("../../fixtures/users.json");

#[derive(Debug, Clone)]
enum FixtureSource {
    File(PathBuf),
    Memory(Bytes),
}

/// Fetch service that serves a fixed local payload instead of the network
///
/// The locator passed to [`FetchService::acquire`] is ignored: every call
/// reads the fixture chosen at construction. A missing or unreadable file is
/// a `TransportFailure`; an empty one becomes `EmptyPayload` at decode time.
/// There is no status step.
#[derive(Debug, Clone)]
pub struct FixtureFetchService {
    source: FixtureSource,
}

impl FixtureFetchService {
    /// Serve the file at `path`, read fresh on every call
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: FixtureSource::File(path.into()),
        }
    }

    /// Serve the conventionally named `users.json` inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self::from_path(fixture_in(dir))
    }

    /// Serve an in-memory payload
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self {
            source: FixtureSource::Memory(bytes.into()),
        }
    }

    /// Serve the user list bundled with the crate
    pub fn bundled() -> Self {
        Self::from_bytes(Bytes::from_static(BUNDLED_USERS))
    }

    /// Path of the backing file, if the fixture is file-based
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            FixtureSource::File(path) => Some(path),
            FixtureSource::Memory(_) => None,
        }
    }
}

#[async_trait]
impl FetchService for FixtureFetchService {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn acquire(&self, locator: &str) -> FetchResult<Bytes> {
        match &self.source {
            FixtureSource::File(path) => {
                debug!(locator, fixture = %path.display(), "reading fixture file");
                let data = tokio::fs::read(path).await.map_err(|e| {
                    debug!(fixture = %path.display(), error = %e, "fixture unreadable");
                    FetchError::TransportFailure(format!(
                        "Failed to read fixture {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                Ok(Bytes::from(data))
            }
            FixtureSource::Memory(bytes) => {
                debug!(locator, bytes = bytes.len(), "serving in-memory fixture");
                Ok(bytes.clone())
            }
        }
    }
}
