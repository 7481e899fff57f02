//! Deciding whether an error response should still be swapped into the page.
//!
//! htmx treats every 4xx/5xx as an error and refuses to swap it. Some servers
//! answer form submissions with `400 Bad Request` plus a perfectly renderable
//! validation partial; [`classify_response`] marks those as swappable.

use serde::{Deserialize, Serialize};

/// Status codes swapped as regular content by default.
pub const DEFAULT_SWAPPABLE_STATUSES: &[u16] = &[400];

/// Flags to force onto an htmx `beforeSwap` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapOverride {
    /// Whether htmx should swap the response body in.
    pub should_swap: bool,
    /// Whether htmx should treat the response as an error.
    pub is_error: bool,
}

impl SwapOverride {
    /// Swap the body and do not report an error.
    pub const SWAP_AS_CONTENT: Self = Self {
        should_swap: true,
        is_error: false,
    };

    /// Writes the decision onto a pair of event flags.
    pub const fn apply(self, should_swap: &mut bool, is_error: &mut bool) {
        *should_swap = self.should_swap;
        *is_error = self.is_error;
    }
}

/// Classifies a response by status with the default rule (only `400`).
///
/// `None` means the library default applies and the event is left untouched.
#[must_use]
pub fn classify_response(status: u16) -> Option<SwapOverride> {
    ResponseClassifier::default().classify(status)
}

/// Status based classifier with a configurable set of swappable codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseClassifier {
    swappable: Vec<u16>,
}

impl ResponseClassifier {
    /// Creates a classifier that swaps the given statuses as content.
    #[must_use]
    pub fn new(swappable: impl Into<Vec<u16>>) -> Self {
        Self {
            swappable: swappable.into(),
        }
    }

    /// Returns the override for `status`, if any.
    #[must_use]
    pub fn classify(&self, status: u16) -> Option<SwapOverride> {
        self.swappable
            .contains(&status)
            .then_some(SwapOverride::SWAP_AS_CONTENT)
    }
}

impl Default for ResponseClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_SWAPPABLE_STATUSES)
    }
}
