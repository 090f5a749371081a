//! Dependency injection infrastructure for Roster
//!
//! The consumer depends on the [`FetchService`] trait, never on a concrete
//! service. Production wiring picks the network or fixture service from
//! config; tests inject mocks.
//!
//! # Example (Production)
//! ```no_run
//! use roster::di::ServiceContainer;
//!
//! # fn example() -> roster::core::RosterResult<()> {
//! let container = ServiceContainer::new()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example (Testing)
//! ```
//! use roster::di::{ServiceContainer, mocks::*};
//! use std::sync::Arc;
//!
//! let config = Arc::new(MockConfigProvider::default());
//! let service = Arc::new(MockFetchService::with_body("[]"));
//!
//! let container = ServiceContainer::with_providers(config, service);
//! ```

pub mod container;
pub mod mocks;
pub mod traits;

// Re-export key types
pub use container::{build_service, ServiceContainer};
pub use traits::{ConfigProvider, FetchService};
