//! Fetch-and-decode services
//!
//! A [`FetchService`](crate::di::FetchService) turns a locator into raw
//! bytes. [`Fetcher`] decodes those bytes into a typed payload and exposes
//! the result through three calling conventions: awaitable, callback and
//! stream.
//!
//! Two services are provided:
//! - [`NetworkFetchService`] issues one HTTP GET per call.
//! - [`FixtureFetchService`] serves a local fixture and ignores the locator.
//!
//! # Example
//! ```no_run
//! use roster::fetch::{Fetcher, NetworkFetchService};
//! use roster::model::User;
//! use std::sync::Arc;
//!
//! # async fn example() -> roster::core::FetchResult<()> {
//! let fetcher = Fetcher::new(Arc::new(NetworkFetchService::new()));
//! let users: Vec<User> = fetcher
//!     .fetch("https://jsonplaceholder.typicode.com/users")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod convention;
pub mod fixture;
pub mod network;
mod pipeline;

pub use convention::{Convention, FetchStream, Fetcher};
pub use fixture::FixtureFetchService;
pub use network::NetworkFetchService;
