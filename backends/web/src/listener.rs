//! Event listener registration with teardown.

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Event, EventTarget};

use crate::error::WebError;

type Callback = Closure<dyn FnMut(Event) -> Result<(), JsValue>>;

/// A listener attached to an [`EventTarget`]; dropping it detaches the listener.
///
/// Handler errors are logged and rethrown to JavaScript, where they surface as
/// uncaught exceptions.
pub struct Subscription {
    target: EventTarget,
    event: String,
    callback: Callback,
}

impl core::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

impl Subscription {
    /// Attaches `handler` to `target` for events named `event`.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser rejects the listener.
    pub fn new<F>(target: &EventTarget, event: &str, mut handler: F) -> Result<Self, WebError>
    where
        F: FnMut(&Event) -> Result<(), WebError> + 'static,
    {
        let name = event.to_string();
        let callback: Callback = Closure::new(move |event: Event| {
            handler(&event).map_err(|error| {
                tracing::error!(event = %event.type_(), %error, "handler failed");
                JsValue::from(error)
            })
        });
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        tracing::trace!(event = %name, "listener attached");
        Ok(Self {
            target: target.clone(),
            event: name,
            callback,
        })
    }

    /// The event type this subscription listens to.
    #[must_use]
    pub fn event(&self) -> &str {
        &self.event
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self
            .target
            .remove_event_listener_with_callback(&self.event, self.callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!(event = %self.event, "failed to detach listener");
        }
    }
}
