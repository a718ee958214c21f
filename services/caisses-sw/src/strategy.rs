//! Request classification and strategy selection.
//!
//! Every intercepted request falls into one of two families, each served
//! by one fixed strategy: navigations go network-first so pages are never
//! stale, while static assets go cache-first so the shell works offline.

use web_sys::{RequestDestination, RequestMode};

/// How a request is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Try the live network, bypassing the HTTP cache; fall back to the
    /// cached login page when it is unreachable.
    NetworkFirst,
    /// Serve from the cache when present, from the network otherwise.
    CacheFirst,
}

/// The two request families the worker distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestClass {
    /// A top-level document load.
    Navigation,
    /// Scripts, styles, images and other subresources.
    Asset,
}

/// Classify an intercepted request from its mode and destination. A
/// request is a navigation when its mode says so, or when it targets a
/// document (some user agents report one but not the other).
pub fn classify(mode: RequestMode, destination: RequestDestination) -> RequestClass {
    if mode == RequestMode::Navigate || destination == RequestDestination::Document {
        RequestClass::Navigation
    } else {
        RequestClass::Asset
    }
}

/// The strategy applied to each request class.
pub fn strategy_for(class: RequestClass) -> Strategy {
    match class {
        RequestClass::Navigation => Strategy::NetworkFirst,
        RequestClass::Asset => Strategy::CacheFirst,
    }
}

/// Cache names left behind by previous worker versions.
pub fn stale_cache_names(names: &[String], current: &str) -> Vec<String> {
    names
        .iter()
        .filter(|name| name.as_str() != current)
        .cloned()
        .collect()
}
