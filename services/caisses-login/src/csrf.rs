//! CSRF token sourcing.
//!
//! The backend rejects an unauthenticated POST without a valid token.
//! The page template exposes one as `window.CSRF_TOKEN`; when it is
//! absent the token is read from the `csrftoken` session cookie. With
//! neither source the token is sent empty, and the backend's rejection
//! then goes through the normal authentication failure path.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlDocument;

const PAGE_GLOBAL: &str = "CSRF_TOKEN";
const COOKIE_NAME: &str = "csrftoken";

/// The token for the next request, possibly empty.
pub fn token() -> String {
    page_global()
        .or_else(|| from_cookie(&document_cookie()))
        .unwrap_or_default()
}

fn page_global() -> Option<String> {
    let window = gloo::utils::window();
    js_sys::Reflect::get(&window, &JsValue::from_str(PAGE_GLOBAL))
        .ok()
        .and_then(|value| value.as_string())
        .filter(|token| !token.is_empty())
}

fn document_cookie() -> String {
    gloo::utils::document()
        .unchecked_into::<HtmlDocument>()
        .cookie()
        .unwrap_or_default()
}

/// The first `csrftoken=` occurrence with a non-empty value, wherever it
/// sits in the cookie string; the value runs to the next semicolon.
pub fn from_cookie(cookie: &str) -> Option<String> {
    let needle = format!("{COOKIE_NAME}=");
    for (start, _) in cookie.match_indices(&needle) {
        let value = &cookie[start + needle.len()..];
        let value = match value.find(';') {
            Some(end) => &value[..end],
            None => value,
        };
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }
    None
}
