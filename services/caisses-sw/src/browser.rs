//! The web_sys rendition of the platform port, and the event wiring.
//!
//! Everything here runs inside the service worker global scope. The
//! JavaScript promises of the Cache API are awaited through `JsFuture`,
//! and their rejections are folded into [`worker::Error`].

use async_trait::async_trait;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{
    Cache, CacheStorage, ExtendableEvent, FetchEvent, Request, RequestCache, RequestInit,
    Response, ServiceWorkerGlobalScope,
};

use caisses_common::err_context::{ErrorContext, ErrorContextExt};

use crate::strategy;
use crate::worker::{Error, OfflineWorker, Platform};

/// The real service worker execution context. Cloning clones a cheap
/// JavaScript reference.
#[derive(Clone)]
pub struct BrowserPlatform {
    scope: ServiceWorkerGlobalScope,
}

impl BrowserPlatform {
    pub fn new(scope: ServiceWorkerGlobalScope) -> BrowserPlatform {
        BrowserPlatform { scope }
    }

    fn caches(&self) -> Result<CacheStorage, Error> {
        self.scope
            .caches()
            .context("cache storage is not available")
            .map_err(Error::from)
    }

    async fn open(&self, cache_name: &str) -> Result<Cache, Error> {
        let cache = JsFuture::from(self.caches()?.open(cache_name))
            .await
            .context("could not open the cache")?;
        cache
            .dyn_into::<Cache>()
            .context("cache storage did not yield a cache")
            .map_err(Error::from)
    }
}

#[async_trait(?Send)]
impl Platform for BrowserPlatform {
    type Request = Request;
    type Response = Response;

    async fn preload(&self, cache_name: &str, urls: &[&str]) -> Result<(), Error> {
        let cache = self.open(cache_name).await?;
        let requests = Array::new();
        for url in urls {
            requests.push(&JsValue::from_str(url));
        }
        let requests: JsValue = requests.into();
        JsFuture::from(cache.add_all_with_str_sequence(&requests))
            .await
            .context("could not preload the offline assets")?;
        Ok(())
    }

    async fn cache_names(&self) -> Result<Vec<String>, Error> {
        let keys = JsFuture::from(self.caches()?.keys())
            .await
            .context("could not list the cache names")?;
        let names = Array::from(&keys)
            .iter()
            .filter_map(|name| name.as_string())
            .collect();
        Ok(names)
    }

    async fn delete_cache(&self, cache_name: &str) -> Result<bool, Error> {
        let deleted = JsFuture::from(self.caches()?.delete(cache_name))
            .await
            .context("could not delete the cache")?;
        Ok(deleted.as_bool().unwrap_or(false))
    }

    async fn skip_waiting(&self) -> Result<(), Error> {
        let promise = self
            .scope
            .skip_waiting()
            .context("skip_waiting is not available")?;
        JsFuture::from(promise)
            .await
            .context("skip_waiting was rejected")?;
        Ok(())
    }

    async fn claim(&self) -> Result<(), Error> {
        JsFuture::from(self.scope.clients().claim())
            .await
            .context("clients.claim was rejected")?;
        Ok(())
    }

    async fn match_url(&self, cache_name: &str, url: &str) -> Result<Option<Response>, Error> {
        let cache = self.open(cache_name).await?;
        let value = JsFuture::from(cache.match_with_str(url))
            .await
            .context("the cache lookup was rejected")?;
        Ok(into_response(value))
    }

    async fn match_request(&self, request: &Request) -> Result<Option<Response>, Error> {
        let value = JsFuture::from(self.caches()?.match_with_request(request))
            .await
            .context("the cache lookup was rejected")?;
        Ok(into_response(value))
    }

    async fn fetch(&self, request: &Request) -> Result<Response, Error> {
        let value = JsFuture::from(self.scope.fetch_with_request(request))
            .await
            .map_err(|source| network_error("fetch was rejected", &source))?;
        value
            .dyn_into::<Response>()
            .context("fetch did not yield a response")
            .map_err(Error::from)
    }

    async fn fetch_no_store(&self, request: &Request) -> Result<Response, Error> {
        let mut init = RequestInit::new();
        init.cache(RequestCache::NoStore);
        let value = JsFuture::from(self.scope.fetch_with_request_and_init(request, &init))
            .await
            .map_err(|source| network_error("fetch was rejected", &source))?;
        value
            .dyn_into::<Response>()
            .context("fetch did not yield a response")
            .map_err(Error::from)
    }

    fn error_response(&self) -> Response {
        Response::error()
    }
}

/// Register the lifecycle handlers on the global scope. Each event
/// drives a fresh engine over the same scope.
pub fn bootstrap(scope: &ServiceWorkerGlobalScope) {
    let install_scope = scope.clone();
    let on_install = Closure::<dyn FnMut(ExtendableEvent)>::new(move |event: ExtendableEvent| {
        gloo_console::log!("service worker: install");
        let worker = OfflineWorker::new(BrowserPlatform::new(install_scope.clone()));
        let job = future_to_promise(async move {
            worker
                .install()
                .await
                .map(|_| JsValue::UNDEFINED)
                .map_err(reject)
        });
        if let Err(source) = event.wait_until(&job) {
            gloo_console::error!("install could not be extended:", source);
        }
    });
    scope.set_oninstall(Some(on_install.as_ref().unchecked_ref()));
    on_install.forget();

    let activate_scope = scope.clone();
    let on_activate = Closure::<dyn FnMut(ExtendableEvent)>::new(move |event: ExtendableEvent| {
        gloo_console::log!("service worker: activate");
        let worker = OfflineWorker::new(BrowserPlatform::new(activate_scope.clone()));
        let job = future_to_promise(async move {
            worker
                .activate()
                .await
                .map(|_| JsValue::UNDEFINED)
                .map_err(reject)
        });
        if let Err(source) = event.wait_until(&job) {
            gloo_console::error!("activate could not be extended:", source);
        }
    });
    scope.set_onactivate(Some(on_activate.as_ref().unchecked_ref()));
    on_activate.forget();

    let fetch_scope = scope.clone();
    let on_fetch = Closure::<dyn FnMut(FetchEvent)>::new(move |event: FetchEvent| {
        let request = event.request();
        let class = strategy::classify(request.mode(), request.destination());
        let worker = OfflineWorker::new(BrowserPlatform::new(fetch_scope.clone()));
        let job = future_to_promise(async move {
            let response = worker.respond(class, &request).await;
            Ok(response.into())
        });
        if let Err(source) = event.respond_with(&job) {
            gloo_console::error!("the fetch could not be answered:", source);
        }
    });
    scope.set_onfetch(Some(on_fetch.as_ref().unchecked_ref()));
    on_fetch.forget();
}

fn into_response(value: JsValue) -> Option<Response> {
    value.dyn_into::<Response>().ok()
}

fn network_error(context: &str, source: &JsValue) -> Error {
    Error::Network {
        context: format!("{context}: {}", describe(source)),
    }
}

fn reject(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl From<ErrorContext<JsValue>> for Error {
    fn from(err: ErrorContext<JsValue>) -> Error {
        Error::Browser {
            context: err.context,
            source: describe(&err.source),
        }
    }
}
