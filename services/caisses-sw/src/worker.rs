//! The offline cache engine.
//!
//! `OfflineWorker` drives the install / activate / fetch lifecycle
//! against a platform port, so the caching behavior can be exercised
//! with an in-memory platform, away from a real browser.

use async_trait::async_trait;
use std::fmt;

use caisses_common::offline::{OfflineManifest, MANIFEST};

use crate::strategy::{self, RequestClass, Strategy};

/// The browser surface the engine drives. The real implementation wraps
/// the service worker global scope; tests substitute an in-memory one.
#[async_trait(?Send)]
pub trait Platform {
    type Request;
    type Response;

    /// Open the named cache and fill it with the given URLs. One failed
    /// URL fails the whole preload.
    async fn preload(&self, cache_name: &str, urls: &[&str]) -> Result<(), Error>;

    /// Names of every cache this origin currently owns.
    async fn cache_names(&self) -> Result<Vec<String>, Error>;

    /// Delete the named cache. True when it existed.
    async fn delete_cache(&self, cache_name: &str) -> Result<bool, Error>;

    /// Ask to activate without waiting for old worker instances to stop.
    async fn skip_waiting(&self) -> Result<(), Error>;

    /// Take control of every open page in scope.
    async fn claim(&self) -> Result<(), Error>;

    /// Look a URL up in the named cache.
    async fn match_url(&self, cache_name: &str, url: &str)
        -> Result<Option<Self::Response>, Error>;

    /// Look a request up across every cache of the origin.
    async fn match_request(&self, request: &Self::Request)
        -> Result<Option<Self::Response>, Error>;

    /// Fetch from the network.
    async fn fetch(&self, request: &Self::Request) -> Result<Self::Response, Error>;

    /// Fetch from the network, bypassing the HTTP cache.
    async fn fetch_no_store(&self, request: &Self::Request) -> Result<Self::Response, Error>;

    /// The generic network-error response.
    fn error_response(&self) -> Self::Response;
}

pub struct OfflineWorker<P> {
    platform: P,
    manifest: OfflineManifest,
}

impl<P: Platform> OfflineWorker<P> {
    pub fn new(platform: P) -> OfflineWorker<P> {
        OfflineWorker {
            platform,
            manifest: MANIFEST,
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Install: preload the offline assets, then ask to activate early.
    /// A failed preload fails the install, and the browser retries the
    /// whole registration later; `skip_waiting` is not reached.
    pub async fn install(&self) -> Result<(), Error> {
        self.platform
            .preload(self.manifest.cache_name, self.manifest.preload)
            .await?;
        self.platform.skip_waiting().await
    }

    /// Activate: drop every cache from a previous version, then take
    /// control of the open pages.
    pub async fn activate(&self) -> Result<(), Error> {
        let names = self.platform.cache_names().await?;
        for name in strategy::stale_cache_names(&names, self.manifest.cache_name) {
            self.platform.delete_cache(&name).await?;
        }
        self.platform.claim().await
    }

    /// Answer one intercepted request. This never fails: network and
    /// cache problems degrade to the platform's error response.
    pub async fn respond(&self, class: RequestClass, request: &P::Request) -> P::Response {
        match strategy::strategy_for(class) {
            Strategy::NetworkFirst => match self.platform.fetch_no_store(request).await {
                Ok(response) => response,
                Err(_) => {
                    let fallback = self
                        .platform
                        .match_url(self.manifest.cache_name, self.manifest.navigation_fallback)
                        .await;
                    match fallback {
                        Ok(Some(cached)) => cached,
                        _ => self.platform.error_response(),
                    }
                }
            },
            Strategy::CacheFirst => match self.platform.match_request(request).await {
                Ok(Some(cached)) => cached,
                // A miss goes to the network and is not written back;
                // the preload list is the whole cache.
                _ => match self.platform.fetch(request).await {
                    Ok(response) => response,
                    Err(_) => self.platform.error_response(),
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The network fetch itself rejected (offline, DNS failure).
    Network { context: String },
    /// A cache storage or lifecycle call rejected.
    Browser { context: String, source: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Network { context } => {
                write!(f, "Network Error: {context}")
            }
            Error::Browser { context, source } => {
                write!(f, "Browser Error: {context} | {source}")
            }
        }
    }
}

impl std::error::Error for Error {}
