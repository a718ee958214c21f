//! Service worker registration, run once when the page comes up.

use wasm_bindgen_futures::{spawn_local, JsFuture};

use caisses_common::routes;

/// Register the offline cache worker. A failed registration is logged
/// and otherwise ignored: the page works without it.
pub fn register_service_worker() {
    let container = gloo::utils::window().navigator().service_worker();
    spawn_local(async move {
        match JsFuture::from(container.register(routes::SERVICE_WORKER)).await {
            Ok(_) => gloo_console::log!("service worker registered"),
            Err(err) => gloo_console::error!("service worker registration failed:", err),
        }
    });
}
