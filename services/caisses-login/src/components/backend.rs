//! The call to the authentication endpoint.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use caisses_common::err_context::ErrorContextExt;
use caisses_common::login::{LoginRequest, LoginResponse};
use caisses_common::routes;

use crate::components::FetchError;
use crate::csrf;

/// A settled authentication exchange: the HTTP ok flag, and the parsed
/// body. Rejections carry a JSON body too, so both sides are needed to
/// interpret the outcome.
pub struct Settlement {
    pub http_ok: bool,
    pub body: LoginResponse,
}

/// Submit the credentials: a same-origin, credentialed JSON POST with
/// the CSRF token header. A thrown fetch or a body that is not JSON
/// surfaces as a `FetchError`.
pub async fn submit_login(credentials: &LoginRequest) -> Result<Settlement, FetchError> {
    let body = serde_json::to_string(credentials)?;

    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.credentials(RequestCredentials::SameOrigin);
    opts.body(Some(&JsValue::from_str(&body)));

    let request = Request::new_with_str_and_init(routes::API_LOGIN, &opts)
        .context("could not build the login request")?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .context("could not set the content type")?;
    request
        .headers()
        .set("X-CSRFToken", &csrf::token())
        .context("could not set the csrf token")?;

    let window = gloo::utils::window();
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .context("could not reach the authentication endpoint")?;
    let response: Response = response
        .dyn_into()
        .context("fetch did not yield a response")?;
    let http_ok = response.ok();

    let body = JsFuture::from(response.json().context("the response has no body")?)
        .await
        .context("the response body is not json")?;
    let body: LoginResponse = serde_wasm_bindgen::from_value(body)?;

    Ok(Settlement { http_ok, body })
}
