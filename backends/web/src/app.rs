use std::{cell::RefCell, rc::Rc};

use htmx_extras_core::{
    BannerSpec, Debouncer, Event as Lifecycle, ExtrasConfig, ResponseClassifier, SwapStyle,
};
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

use crate::{
    dom::Page,
    error::WebError,
    htmx::{BeforeSwapDetail, Htmx},
    listener::Subscription,
    logging::init_logging,
    timer::BrowserScheduler,
};

/// Builder for [`HtmxExtras`].
#[derive(Debug, Default, Clone)]
pub struct HtmxExtrasBuilder {
    config: ExtrasConfig,
}

impl HtmxExtrasBuilder {
    /// Creates a new builder with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a JSON configuration (see [`ExtrasConfig::from_json`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be decoded.
    pub fn from_json(json: &str) -> Result<Self, WebError> {
        Ok(Self::with_config(ExtrasConfig::from_json(json)?))
    }

    /// Starts from an existing configuration.
    #[must_use]
    pub const fn with_config(config: ExtrasConfig) -> Self {
        Self { config }
    }

    /// Sets the default htmx swap style.
    #[must_use]
    pub const fn swap_style(mut self, style: SwapStyle) -> Self {
        self.config.swap_style = style;
        self
    }

    /// Sets the route whose links carry the screen area.
    #[must_use]
    pub fn screen_area_route(mut self, route: impl Into<String>) -> Self {
        self.config.screen_area.route = route.into();
        self
    }

    /// Sets the banner message.
    #[must_use]
    pub fn banner_text(mut self, text: impl Into<String>) -> Self {
        self.config.banner.text = text.into();
        self
    }

    /// Returns the configuration collected so far.
    #[must_use]
    pub const fn config(&self) -> &ExtrasConfig {
        &self.config
    }

    /// Attaches every listener and configures htmx.
    ///
    /// # Errors
    ///
    /// Returns an error if the DOM or htmx is unavailable, or a listener
    /// cannot be attached.
    pub fn install(self) -> Result<HtmxExtras, WebError> {
        HtmxExtras::install(self.config)
    }
}

struct Glue {
    page: Page,
    config: ExtrasConfig,
    classifier: ResponseClassifier,
}

impl Glue {
    fn show_failure_banner(&self, event: &Event) -> Result<(), WebError> {
        let banner = BannerSpec::new(&self.config.banner);
        tracing::error!(event = %event.type_(), id = %banner.id, "request failed");
        self.page.show_banner(&banner)?;
        Ok(())
    }

    fn before_swap(&self, event: &Event) -> Result<(), WebError> {
        let detail = BeforeSwapDetail::from_event(event)?;
        let status = detail.status()?;
        if let Some(decision) = self.classifier.classify(status) {
            tracing::debug!(status, "swapping error response as content");
            detail.apply(decision)?;
        }
        Ok(())
    }

    fn recompute(&self) -> Result<(), WebError> {
        let rules = &self.config.screen_area;
        let area = self.page.viewport()?.area();
        if self.page.ensure_screen_area(area, rules)? {
            return Ok(());
        }
        let rewritten = self.page.rewrite_links(area, rules)?;
        tracing::debug!(area, rewritten, "screen area links updated");
        Ok(())
    }
}

/// The installed glue. Dropping it (or calling [`HtmxExtras::dispose`])
/// detaches every listener and cancels a pending resize recompute.
#[wasm_bindgen]
pub struct HtmxExtras {
    subscriptions: Vec<Subscription>,
    debouncer: Rc<Debouncer<BrowserScheduler>>,
    glue: Rc<Glue>,
}

impl core::fmt::Debug for HtmxExtras {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HtmxExtras")
            .field("subscriptions", &self.subscriptions)
            .field("debouncer", &self.debouncer)
            .finish_non_exhaustive()
    }
}

impl HtmxExtras {
    fn install(config: ExtrasConfig) -> Result<Self, WebError> {
        init_logging(config.level()?);

        let page = Page::new()?;
        Htmx::from_window(page.window())?.set_default_swap_style(config.swap_style)?;

        let document: EventTarget = page.document().clone().into();
        let window: EventTarget = page.window().clone().into();
        let debouncer = Rc::new(Debouncer::new(BrowserScheduler, config.screen_area.debounce));
        let glue = Rc::new(Glue {
            classifier: config.classifier(),
            page,
            config,
        });

        let mut subscriptions = Vec::new();
        for name in &glue.config.failure_events {
            let glue = Rc::clone(&glue);
            subscriptions.push(Subscription::new(&document, name, move |event| {
                glue.show_failure_banner(event)
            })?);
        }
        {
            let glue = Rc::clone(&glue);
            subscriptions.push(Subscription::new(
                &document,
                Lifecycle::BeforeSwap.name(),
                move |event| glue.before_swap(event),
            )?);
        }
        for trigger in [Lifecycle::AfterSwap, Lifecycle::DomContentLoaded] {
            let glue = Rc::clone(&glue);
            subscriptions.push(Subscription::new(&document, trigger.name(), move |_| glue.recompute())?);
        }
        {
            let glue = Rc::clone(&glue);
            let debouncer = Rc::clone(&debouncer);
            subscriptions.push(Subscription::new(&window, Lifecycle::Resize.name(), move |_| {
                let glue = Rc::clone(&glue);
                debouncer.schedule_recompute(move || {
                    if let Err(error) = glue.recompute() {
                        tracing::error!(%error, "resize recompute failed");
                    }
                });
                Ok(())
            })?);
        }

        // Loaded after DOMContentLoaded already fired. A failure here stays
        // local to the rewriter; the other listeners remain attached.
        if glue.page.document().ready_state() != "loading" {
            if let Err(error) = glue.recompute() {
                tracing::error!(%error, "initial recompute failed");
            }
        }

        tracing::info!(
            swap_style = %glue.config.swap_style,
            listeners = subscriptions.len(),
            "htmx extras installed"
        );
        Ok(Self {
            subscriptions,
            debouncer,
            glue,
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ExtrasConfig {
        &self.glue.config
    }

    /// Event types currently listened to.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.subscriptions.iter().map(Subscription::event)
    }
}

#[wasm_bindgen]
impl HtmxExtras {
    /// Installs the glue, optionally configured by a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or installation fails.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<Self, WebError> {
        HtmxExtrasBuilder::from_json(config.as_deref().unwrap_or_default())?.install()
    }

    /// Detaches all listeners and cancels a pending resize recompute.
    #[wasm_bindgen]
    pub fn dispose(&mut self) {
        if self.subscriptions.is_empty() {
            return;
        }
        self.debouncer.cancel();
        self.subscriptions.clear();
        tracing::info!("htmx extras removed");
    }

    /// Whether listeners are still attached.
    #[wasm_bindgen(getter, js_name = isActive)]
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.subscriptions.is_empty()
    }
}

impl Drop for HtmxExtras {
    fn drop(&mut self) {
        self.dispose();
    }
}

thread_local! {
    static INSTALLED: RefCell<Option<HtmxExtras>> = const { RefCell::new(None) };
}

/// Installs the page-wide instance, replacing any previous one.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or installation fails.
#[wasm_bindgen]
pub fn install(config: Option<String>) -> Result<(), WebError> {
    let extras = HtmxExtras::new(config)?;
    let previous = INSTALLED.with(|slot| slot.borrow_mut().replace(extras));
    drop(previous);
    Ok(())
}

/// Tears the page-wide instance down. Returns `false` if nothing was installed.
#[wasm_bindgen]
#[must_use]
pub fn uninstall() -> bool {
    INSTALLED
        .with(|slot| slot.borrow_mut().take())
        .is_some()
}

/// Module entry point: installs with the default configuration.
///
/// # Errors
///
/// Rejects the module initialisation promise when installation fails.
#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    install(None).map_err(JsValue::from)
}
