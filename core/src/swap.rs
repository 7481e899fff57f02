//! htmx swap strategies.

use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// How htmx places a response relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SwapStyle {
    /// Replace the target's children.
    #[serde(rename = "innerHTML")]
    InnerHtml,
    /// Replace the whole target element.
    #[default]
    #[serde(rename = "outerHTML")]
    OuterHtml,
    /// Replace the target's text content without parsing HTML.
    #[serde(rename = "textContent")]
    TextContent,
    /// Insert before the target.
    #[serde(rename = "beforebegin")]
    BeforeBegin,
    /// Insert before the target's first child.
    #[serde(rename = "afterbegin")]
    AfterBegin,
    /// Insert after the target's last child.
    #[serde(rename = "beforeend")]
    BeforeEnd,
    /// Insert after the target.
    #[serde(rename = "afterend")]
    AfterEnd,
    /// Remove the target regardless of the response.
    #[serde(rename = "delete")]
    Delete,
    /// Do not touch the DOM.
    #[serde(rename = "none")]
    None,
}

impl SwapStyle {
    /// Every style, in htmx documentation order.
    pub const ALL: [Self; 9] = [
        Self::InnerHtml,
        Self::OuterHtml,
        Self::TextContent,
        Self::BeforeBegin,
        Self::AfterBegin,
        Self::BeforeEnd,
        Self::AfterEnd,
        Self::Delete,
        Self::None,
    ];

    /// The spelling htmx expects in `hx-swap` and `htmx.config.defaultSwapStyle`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InnerHtml => "innerHTML",
            Self::OuterHtml => "outerHTML",
            Self::TextContent => "textContent",
            Self::BeforeBegin => "beforebegin",
            Self::AfterBegin => "afterbegin",
            Self::BeforeEnd => "beforeend",
            Self::AfterEnd => "afterend",
            Self::Delete => "delete",
            Self::None => "none",
        }
    }
}

impl fmt::Display for SwapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwapStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| Error::UnknownSwapStyle(s.to_string()))
    }
}
