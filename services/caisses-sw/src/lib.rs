pub mod browser;
pub mod strategy;
pub mod worker;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::ServiceWorkerGlobalScope;

/// Entry point, run when the browser evaluates the worker script.
#[wasm_bindgen(start)]
pub fn start() {
    match js_sys::global().dyn_into::<ServiceWorkerGlobalScope>() {
        Ok(scope) => browser::bootstrap(&scope),
        Err(_) => {
            gloo_console::warn!("not a service worker scope, offline cache disabled");
        }
    }
}
