//! Access to the global `htmx` object and its event payloads.

use htmx_extras_core::{Event as Lifecycle, SwapOverride, SwapStyle};
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, Event, Window};

use crate::error::WebError;

fn get(target: &JsValue, key: &str) -> Result<JsValue, WebError> {
    Ok(Reflect::get(target, &JsValue::from_str(key))?)
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), WebError> {
    Reflect::set(target, &JsValue::from_str(key), value)?;
    Ok(())
}

/// Handle to `window.htmx`.
#[derive(Debug, Clone)]
pub struct Htmx {
    object: JsValue,
}

impl Htmx {
    /// Looks up the global `htmx` object.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::HtmxUnavailable`] when htmx has not been loaded.
    pub fn from_window(window: &Window) -> Result<Self, WebError> {
        let object = get(window, "htmx")?;
        if !object.is_object() {
            return Err(WebError::HtmxUnavailable);
        }
        Ok(Self { object })
    }

    fn config(&self) -> Result<JsValue, WebError> {
        let config = get(&self.object, "config")?;
        if config.is_object() {
            Ok(config)
        } else {
            Err(WebError::HtmxUnavailable)
        }
    }

    /// Sets `htmx.config.defaultSwapStyle`.
    ///
    /// # Errors
    ///
    /// Returns an error if `htmx.config` is missing or read-only.
    pub fn set_default_swap_style(&self, style: SwapStyle) -> Result<(), WebError> {
        set(&self.config()?, "defaultSwapStyle", &JsValue::from_str(style.as_str()))
    }

    /// Reads `htmx.config.defaultSwapStyle`.
    ///
    /// # Errors
    ///
    /// Returns an error if `htmx.config` is missing or holds an unknown style.
    pub fn default_swap_style(&self) -> Result<Option<SwapStyle>, WebError> {
        get(&self.config()?, "defaultSwapStyle")?
            .as_string()
            .map(|name| name.parse::<SwapStyle>().map_err(WebError::from))
            .transpose()
    }
}

/// The `detail` object of an `htmx:beforeSwap` event.
#[derive(Debug, Clone)]
pub struct BeforeSwapDetail {
    detail: JsValue,
}

impl BeforeSwapDetail {
    const EVENT: &'static str = Lifecycle::BeforeSwap.name();

    /// Extracts the detail from a `beforeSwap` event.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Payload`] if the event carries no object detail.
    pub fn from_event(event: &Event) -> Result<Self, WebError> {
        let detail = event
            .dyn_ref::<CustomEvent>()
            .map(CustomEvent::detail)
            .filter(JsValue::is_object)
            .ok_or(WebError::Payload {
                event: Self::EVENT,
                reason: "missing detail",
            })?;
        Ok(Self { detail })
    }

    /// `detail.xhr.status`.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Payload`] if there is no numeric status.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn status(&self) -> Result<u16, WebError> {
        let xhr = get(&self.detail, "xhr")?;
        if !xhr.is_object() {
            return Err(WebError::Payload {
                event: Self::EVENT,
                reason: "missing xhr",
            });
        }
        get(&xhr, "status")?
            .as_f64()
            .map(|status| status as u16)
            .ok_or(WebError::Payload {
                event: Self::EVENT,
                reason: "missing status",
            })
    }

    /// Writes both flags onto the detail so htmx picks them up.
    ///
    /// # Errors
    ///
    /// Returns an error if the detail object is frozen.
    pub fn apply(&self, decision: SwapOverride) -> Result<(), WebError> {
        set(&self.detail, "shouldSwap", &JsValue::from_bool(decision.should_swap))?;
        set(&self.detail, "isError", &JsValue::from_bool(decision.is_error))
    }
}
