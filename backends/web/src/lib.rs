#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Browser backend for `htmx-extras`.
//!
//! Loaded next to htmx, this crate:
//!
//! - puts a dismissible banner on top of the page whenever htmx reports a
//!   failed request,
//! - lets `400` responses swap in like any other fragment,
//! - makes `outerHTML` the default swap style,
//! - keeps a `screen_area` query parameter on every `/book` link up to date,
//!   reloading the reader page when its own value goes stale.
//!
//! With the `autostart` feature the glue installs itself when the module is
//! instantiated; otherwise construct an [`HtmxExtras`] (from Rust through
//! [`HtmxExtrasBuilder`], or `new HtmxExtras(json)` from JavaScript).

mod app;
mod dom;
mod error;
mod htmx;
mod listener;
mod logging;
mod timer;

pub use app::{HtmxExtras, HtmxExtrasBuilder, install, uninstall};
pub use dom::Page;
pub use error::WebError;
pub use htmx::{BeforeSwapDetail, Htmx};
pub use listener::Subscription;
pub use logging::init_logging;
pub use timer::BrowserScheduler;
