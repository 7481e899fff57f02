//! Console logging and panic reporting.

use std::sync::Once;

use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

static TRACING_INSTALLED: Once = Once::new();

/// Routes panics and `tracing` events to the browser console (idempotent).
///
/// Only the first call decides the level. If the host page already installed
/// a global subscriber, that one is kept.
pub fn init_logging(level: Level) {
    TRACING_INSTALLED.call_once(|| {
        console_error_panic_hook::set_once();

        let layer = WASMLayer::new(
            WASMLayerConfigBuilder::new()
                .set_max_level(level)
                .set_report_logs_in_timings(false)
                .build(),
        );
        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            web_sys::console::warn_1(&"htmx-extras: a tracing subscriber is already installed".into());
        }
    });
}
