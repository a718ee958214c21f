use std::error::Error;
use std::fmt::{self, Display, Formatter};
use wasm_bindgen::JsValue;

use caisses_common::err_context::ErrorContext;

pub mod backend;
pub mod login;

/// A browser-side request failure: what we were doing, and the value the
/// platform threw. It lands in the console for developers; the user gets
/// the fixed connectivity message instead.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchError {
    context: String,
    source: JsValue,
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {:?}", self.context, self.source)
    }
}

impl Error for FetchError {}

impl From<ErrorContext<JsValue>> for FetchError {
    fn from(err: ErrorContext<JsValue>) -> FetchError {
        FetchError {
            context: err.context,
            source: err.source,
        }
    }
}

impl From<serde_wasm_bindgen::Error> for FetchError {
    fn from(err: serde_wasm_bindgen::Error) -> FetchError {
        FetchError {
            context: "could not deserialize the response body".to_string(),
            source: err.into(),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> FetchError {
        FetchError {
            context: "could not serialize the login request".to_string(),
            source: JsValue::from_str(&err.to_string()),
        }
    }
}
