//! Service container for dependency injection

use super::traits::{ConfigProvider, FetchService};
use crate::config::{Config, SourceKind};
use crate::core::RosterResult;
use crate::fetch::{Fetcher, FixtureFetchService, NetworkFetchService};
use std::sync::Arc;
use tracing::debug;

/// Service container for dependency injection
///
/// Holds the configuration and the fetch service behind trait objects, so
/// the network service can be swapped for a fixture or a mock without the
/// consumer knowing.
///
/// # Example (Production)
///
/// ```no_run
/// use roster::di::ServiceContainer;
///
/// # fn example() -> roster::core::RosterResult<()> {
/// let container = ServiceContainer::new()?;
/// println!("Users URL: {}", container.config().users_url());
/// # Ok(())
/// # }
/// ```
///
/// # Example (Testing)
///
/// ```
/// use roster::di::{ServiceContainer, mocks::*};
/// use std::sync::Arc;
///
/// let config = Arc::new(MockConfigProvider::default());
/// let service = Arc::new(MockFetchService::with_body("[]"));
///
/// let container = ServiceContainer::with_providers(config, service);
/// assert_eq!(container.fetcher().service().name(), "mock");
/// ```
#[derive(Clone)]
pub struct ServiceContainer {
    pub config: Arc<dyn ConfigProvider>,
    pub fetcher: Fetcher,
}

impl ServiceContainer {
    /// Create a new service container with production implementations
    ///
    /// Loads config from disk (creating the default file on first run) and
    /// builds the fetch service it selects.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Config file cannot be loaded or created
    /// - The HTTP client cannot be built
    pub fn new() -> RosterResult<Self> {
        Self::from_config(Config::load()?)
    }

    /// Create a service container from an already loaded config
    pub fn from_config(config: Config) -> RosterResult<Self> {
        let service = build_service(&config)?;
        Ok(Self::with_providers(Arc::new(config), service))
    }

    /// Create a service container with custom provider implementations
    ///
    /// This is primarily useful for testing, where you can inject mock
    /// implementations of each service.
    pub fn with_providers(config: Arc<dyn ConfigProvider>, service: Arc<dyn FetchService>) -> Self {
        Self {
            config,
            fetcher: Fetcher::new(service),
        }
    }

    /// Get the configuration provider
    pub fn config(&self) -> &dyn ConfigProvider {
        self.config.as_ref()
    }

    /// Get the fetcher
    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }
}

/// Build the fetch service selected by `config`
pub fn build_service(config: &dyn ConfigProvider) -> RosterResult<Arc<dyn FetchService>> {
    let service: Arc<dyn FetchService> = match config.source() {
        SourceKind::Network => Arc::new(NetworkFetchService::with_user_agent(config.user_agent())?),
        SourceKind::Fixture => match config.fixture_path() {
            Some(path) => Arc::new(FixtureFetchService::from_path(path)),
            None => Arc::new(FixtureFetchService::bundled()),
        },
    };
    debug!(service = service.name(), "fetch service selected");
    Ok(service)
}
