//! The dismissible banner shown when a request fails.

use serde::{Deserialize, Serialize};

use crate::id::{BANNER_ID_LENGTH, make_id};

/// Text shown in every error banner unless configured otherwise.
pub const DEFAULT_BANNER_TEXT: &str = "An error occurred; sorry for the inconvenience! (click to dismiss)";

/// Classes giving the banner its tint, spacing and sticky placement.
pub const DEFAULT_BANNER_CLASSES: &[&str] = &[
    "bg-red-100",
    "p-2",
    "rounded",
    "w-full",
    "sticky",
    "top-0",
    "dark:text-black",
    "cursor-pointer",
];

/// Appearance of error banners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BannerConfig {
    /// User facing message.
    pub text: String,
    /// Classes added to the banner element.
    pub classes: Vec<String>,
    /// Length of the random element id.
    pub id_length: usize,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_BANNER_TEXT.into(),
            classes: DEFAULT_BANNER_CLASSES.iter().map(|&c| c.into()).collect(),
            id_length: BANNER_ID_LENGTH,
        }
    }
}

/// Everything needed to put one banner on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerSpec {
    /// Element id, used again at click time to find the banner.
    pub id: String,
    /// Message.
    pub text: String,
    /// Presentation classes.
    pub classes: Vec<String>,
}

impl BannerSpec {
    /// Builds a banner with a fresh random id.
    #[must_use]
    pub fn new(config: &BannerConfig) -> Self {
        Self::with_id(config, make_id(config.id_length))
    }

    /// Builds a banner with a known id.
    #[must_use]
    pub fn with_id(config: &BannerConfig, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: config.text.clone(),
            classes: config.classes.clone(),
        }
    }
}
