use thiserror::Error;
use wasm_bindgen::JsValue;

/// Error type produced by the web backend.
#[derive(Debug, Error)]
pub enum WebError {
    /// The DOM APIs are not accessible (e.g., when executed outside of a browser).
    #[error("DOM is not available")]
    DomUnavailable,
    /// The global `htmx` object (or its `config`) is missing.
    #[error("htmx is not loaded on this page")]
    HtmxUnavailable,
    /// An event did not carry the payload htmx documents for it.
    #[error("unexpected `{event}` payload: {reason}")]
    Payload {
        /// Event type.
        event: &'static str,
        /// What was missing.
        reason: &'static str,
    },
    /// Wrapper around JavaScript exceptions.
    #[error("JavaScript error: {0}")]
    Js(String),
    /// Link rewriting or configuration failed.
    #[error(transparent)]
    Core(#[from] htmx_extras_core::Error),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        value
            .as_string()
            .map_or_else(|| Self::Js(format!("{value:?}")), Self::Js)
    }
}

impl From<WebError> for JsValue {
    fn from(value: WebError) -> Self {
        match value {
            WebError::Js(msg) => Self::from(msg),
            other => js_sys::Error::new(&other.to_string()).into(),
        }
    }
}
