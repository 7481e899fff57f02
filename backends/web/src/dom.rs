use crate::error::WebError;

use htmx_extras_core::{BannerSpec, ScreenAreaRules, Viewport, navigation_search, rewrite_link};

use wasm_bindgen::{JsCast, JsValue, closure::Closure};

use web_sys::{Document, Element, HtmlElement, Window};

/// The browser page the glue operates on.
#[derive(Debug, Clone)]
pub struct Page {
    window: Window,
    document: Document,
}

impl Page {
    /// Binds to the current `window` and `document`.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::DomUnavailable`] outside of a browser.
    pub fn new() -> Result<Self, WebError> {
        let window: Window = web_sys::window().ok_or(WebError::DomUnavailable)?;
        let document: Document = window.document().ok_or(WebError::DomUnavailable)?;
        Ok(Self { window, document })
    }

    /// Returns the owning window.
    #[must_use]
    pub const fn window(&self) -> &Window {
        &self.window
    }

    /// Returns the document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Current `innerWidth` × `innerHeight`.
    ///
    /// # Errors
    ///
    /// Returns an error if the window does not report numeric dimensions.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn viewport(&self) -> Result<Viewport, WebError> {
        let dimension = |value: JsValue| {
            value
                .as_f64()
                .map(|pixels| pixels as u32)
                .ok_or_else(|| WebError::Js("viewport dimension is not a number".into()))
        };
        Ok(Viewport::new(
            dimension(self.window.inner_width()?)?,
            dimension(self.window.inner_height()?)?,
        ))
    }

    /// Puts a banner on top of the body; clicking it removes it again.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is missing or DOM insertion fails.
    pub fn show_banner(&self, banner: &BannerSpec) -> Result<HtmlElement, WebError> {
        let body = self.document.body().ok_or(WebError::DomUnavailable)?;
        let element = self
            .document
            .create_element("p")?
            .dyn_into::<HtmlElement>()
            .map_err(|e| WebError::from(JsValue::from(e)))?;
        element.set_id(&banner.id);
        element.set_inner_text(&banner.text);
        let classes = element.class_list();
        for class in &banner.classes {
            classes.add_1(class)?;
        }
        body.insert_before(&element, body.first_child().as_ref())?;

        let document = self.document.clone();
        let id = banner.id.clone();
        let dismiss = Closure::once_into_js(move || -> Result<(), JsValue> {
            let banner = document
                .get_element_by_id(&id)
                .ok_or_else(|| JsValue::from(WebError::Js(format!("banner `{id}` is gone"))))?;
            banner.remove();
            Ok(())
        });
        element.add_event_listener_with_callback("click", dismiss.unchecked_ref())?;
        Ok(element)
    }

    /// Stamps `area` onto every link matching `rules`; returns how many changed.
    ///
    /// # Errors
    ///
    /// Returns an error if a selector is rejected or a link cannot be resolved.
    pub fn rewrite_links(&self, area: u64, rules: &ScreenAreaRules) -> Result<usize, WebError> {
        let origin = self.window.location().origin()?;
        let mut rewritten = 0;
        for attribute in &rules.attributes {
            let nodes = self.document.query_selector_all(&rules.selector(attribute))?;
            for index in 0..nodes.length() {
                let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok())
                else {
                    continue;
                };
                let Some(value) = element.get_attribute(attribute) else {
                    continue;
                };
                let link = rewrite_link(&origin, &value, area, rules)?;
                element.set_attribute(attribute, &link)?;
                rewritten += 1;
            }
        }
        Ok(rewritten)
    }

    /// Reloads the page with a fresh screen area if it is the reader route and
    /// its own value is stale. Returns whether a navigation was started.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be read or assigned.
    pub fn ensure_screen_area(&self, area: u64, rules: &ScreenAreaRules) -> Result<bool, WebError> {
        let location = self.window.location();
        let path = location.pathname()?;
        let search = location.search()?;
        let Some(fresh) = navigation_search(&path, &search, area, rules) else {
            return Ok(false);
        };
        tracing::warn!(%path, area, "screen area changed, reloading");
        location.set_search(&fresh)?;
        Ok(true)
    }
}
