//! Trait definitions for dependency injection

use crate::config::SourceKind;
use crate::core::FetchResult;
use crate::fetch::Convention;
use async_trait::async_trait;
use bytes::Bytes;
use std::path::Path;

/// Trait for configuration access
///
/// Provides read-only access to application configuration.
/// Implementations should be thread-safe (Send + Sync).
pub trait ConfigProvider: Send + Sync {
    /// Get the users endpoint URL
    fn users_url(&self) -> &str;

    /// Get where user records are sourced from
    fn source(&self) -> SourceKind;

    /// Get the fixture file path (None serves the bundled fixture)
    fn fixture_path(&self) -> Option<&Path>;

    /// Get the default calling convention
    fn convention(&self) -> Convention;

    /// Get the User-Agent sent by the network service
    fn user_agent(&self) -> &str;
}

/// Trait for raw payload acquisition
///
/// Resolves a locator and returns the bytes behind it. Implementations own
/// the first three validation steps (locator, transport, status) and report
/// them with the matching [`FetchError`](crate::core::FetchError) kind.
/// Decoding is left to [`Fetcher`](crate::fetch::Fetcher) so every service
/// shares one decoder.
///
/// Implementations must not keep per-call mutable state: one instance is
/// shared across concurrent calls.
#[async_trait]
pub trait FetchService: Send + Sync {
    /// Short label used in logs
    fn name(&self) -> &str;

    /// Resolve `locator` and acquire the payload bytes
    async fn acquire(&self, locator: &str) -> FetchResult<Bytes>;
}
