#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Platform-neutral half of `htmx-extras`.
//!
//! Everything here is plain Rust with no DOM access so it can be unit tested
//! natively: random banner ids, the `400` swap rule, htmx swap styles, the
//! screen-area arithmetic and query rewriting, and the debouncer behind the
//! resize handler. The browser wiring lives in `htmx-extras-web`.

pub mod banner;
pub mod classify;
pub mod config;
pub mod debounce;
mod error;
pub mod event;
pub mod id;
pub mod screen;
pub mod swap;

pub use banner::{BannerConfig, BannerSpec};
pub use classify::{ResponseClassifier, SwapOverride, classify_response};
pub use config::ExtrasConfig;
pub use debounce::{Debouncer, Scheduler};
pub use error::{Error, Result};
pub use event::Event;
pub use id::make_id;
pub use screen::{ScreenAreaRules, Viewport, navigation_search, rewrite_link};
pub use swap::SwapStyle;
