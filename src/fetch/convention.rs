//! The three calling conventions over one fetch-and-decode pipeline

use crate::core::{FetchError, FetchResult};
use crate::di::FetchService;
use crate::fetch::pipeline::decode;
use futures::stream::{self, BoxStream, StreamExt};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex};
use std::thread;
use tokio::runtime::{self, Handle};
use tokio::sync::oneshot;

/// Single-value stream produced by [`Fetcher::fetch_stream`]
pub type FetchStream<T> = BoxStream<'static, FetchResult<T>>;

/// How a caller wants to receive the result of a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Result handed to a closure on a runtime worker task
    Callback,
    /// Result returned from an awaited future
    Async,
    /// Result emitted by a lazy single-item stream
    #[default]
    Stream,
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Convention::Callback => "callback",
            Convention::Async => "async",
            Convention::Stream => "stream",
        };
        f.write_str(name)
    }
}

/// Typed front end over a [`FetchService`]
///
/// Every convention runs the same steps in the same order: the service
/// resolves the locator, acquires bytes and checks status, then the shared
/// decoder rejects empty payloads and decodes into `T`. The fetcher holds no
/// per-call state, so one instance can serve any number of concurrent calls.
#[derive(Clone)]
pub struct Fetcher {
    service: Arc<dyn FetchService>,
    runtime: Option<Handle>,
}

impl Fetcher {
    /// Wrap `service`, remembering the Tokio runtime in scope (if any) for
    /// callbacks issued later from threads outside it
    pub fn new(service: Arc<dyn FetchService>) -> Self {
        Self {
            service,
            runtime: Handle::try_current().ok(),
        }
    }

    /// The service this fetcher delegates to
    pub fn service(&self) -> &dyn FetchService {
        self.service.as_ref()
    }

    /// Awaitable convention
    ///
    /// Suspends only while the service acquires bytes. Dropping the returned
    /// future abandons the in-flight request.
    pub async fn fetch<T: DeserializeOwned>(&self, locator: &str) -> FetchResult<T> {
        let bytes = self.service.acquire(locator).await?;
        decode(&bytes)
    }

    /// Callback convention
    ///
    /// Starts the fetch in the background and hands the result to `handler`
    /// exactly once. The fetch runs on the Tokio runtime in scope, else on the
    /// one captured by [`Fetcher::new`], else on a dedicated thread driving
    /// its own current-thread runtime, so plain synchronous code can use it
    /// too. If that thread cannot be started the handler receives a
    /// `TransportFailure` right away. Fire-and-forget: there is no way to
    /// cancel it once started.
    pub fn fetch_with<T, F>(&self, locator: impl Into<String>, handler: F)
    where
        T: DeserializeOwned + Send + 'static,
        F: FnOnce(FetchResult<T>) + Send + 'static,
    {
        let fetcher = self.clone();
        let locator = locator.into();

        match Handle::try_current().ok().or_else(|| self.runtime.clone()) {
            Some(handle) => {
                handle.spawn(async move {
                    let result = fetcher.fetch(&locator).await;
                    handler(result);
                });
            }
            None => fetch_on_own_thread(fetcher, locator, handler),
        }
    }

    /// Stream convention
    ///
    /// Returns a cold stream: nothing happens until it is first polled. It
    /// yields exactly one item, either the decoded value or the error, then
    /// ends. Dropping it stops the fetch. Each call builds a fresh stream
    /// that fetches again.
    pub fn fetch_stream<T>(&self, locator: impl Into<String>) -> FetchStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let fetcher = self.clone();
        let locator = locator.into();
        stream::once(async move { fetcher.fetch(&locator).await }).boxed()
    }

    /// Fetch through the chosen convention and collect its single result
    pub async fn fetch_via<T>(&self, convention: Convention, locator: &str) -> FetchResult<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        match convention {
            Convention::Async => self.fetch(locator).await,
            Convention::Callback => {
                let (tx, rx) = oneshot::channel();
                self.fetch_with(locator, move |result: FetchResult<T>| {
                    // The receiver only goes away if the caller stopped waiting
                    let _ = tx.send(result);
                });
                rx.await.map_err(|_| {
                    FetchError::TransportFailure("fetch task ended without a result".to_string())
                })?
            }
            Convention::Stream => {
                let mut results = self.fetch_stream(locator);
                match results.next().await {
                    Some(result) => result,
                    None => Err(FetchError::TransportFailure(
                        "fetch stream ended without a result".to_string(),
                    )),
                }
            }
        }
    }
}

/// Run one callback fetch on a fresh thread with its own runtime
///
/// The handler sits in a shared slot so a failure to start the thread can
/// still report through it.
fn fetch_on_own_thread<T, F>(fetcher: Fetcher, locator: String, handler: F)
where
    T: DeserializeOwned + Send + 'static,
    F: FnOnce(FetchResult<T>) + Send + 'static,
{
    let pending = Arc::new(Mutex::new(Some(handler)));
    let worker = Arc::clone(&pending);

    let spawned = thread::Builder::new()
        .name("roster-fetch".to_string())
        .spawn(move || {
            let result: FetchResult<T> =
                match runtime::Builder::new_current_thread().enable_all().build() {
                    Ok(rt) => rt.block_on(fetcher.fetch(&locator)),
                    Err(e) => Err(FetchError::TransportFailure(format!(
                        "fetch runtime initialization failed: {}",
                        e
                    ))),
                };
            deliver(&worker, result);
        });

    if let Err(e) = spawned {
        deliver(
            &pending,
            Err(FetchError::TransportFailure(format!(
                "fetch thread spawn failed: {}",
                e
            ))),
        );
    }
}

fn deliver<T, F>(slot: &Mutex<Option<F>>, result: FetchResult<T>)
where
    F: FnOnce(FetchResult<T>),
{
    let handler = match slot.lock() {
        Ok(mut handler) => handler.take(),
        Err(poisoned) => poisoned.into_inner().take(),
    };
    if let Some(handler) = handler {
        handler(result);
    }
}
