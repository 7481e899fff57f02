//! Runtime configuration, usually handed over from JavaScript as JSON.

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::{
    BannerConfig, Error, Event, ResponseClassifier, Result, ScreenAreaRules, SwapStyle,
    classify::DEFAULT_SWAPPABLE_STATUSES,
};

/// Every knob the glue exposes. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtrasConfig {
    /// Written to `htmx.config.defaultSwapStyle` on install.
    pub swap_style: SwapStyle,
    /// Error statuses whose bodies are swapped in as normal content.
    pub swappable_statuses: Vec<u16>,
    /// htmx events that put an error banner on the page.
    pub failure_events: Vec<String>,
    /// Banner appearance.
    pub banner: BannerConfig,
    /// Screen-area link rewriting.
    pub screen_area: ScreenAreaRules,
    /// Maximum tracing level sent to the console.
    pub log_level: String,
}

impl Default for ExtrasConfig {
    fn default() -> Self {
        Self {
            swap_style: SwapStyle::default(),
            swappable_statuses: DEFAULT_SWAPPABLE_STATUSES.to_vec(),
            failure_events: vec![
                Event::ResponseError.name().into(),
                Event::SendError.name().into(),
            ],
            banner: BannerConfig::default(),
            screen_area: ScreenAreaRules::default(),
            log_level: "info".into(),
        }
    }
}

impl ExtrasConfig {
    /// Decodes a JSON configuration; an empty or blank string yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed JSON and
    /// [`Error::InvalidLogLevel`] for an unknown log level.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(json)?;
        config.level()?;
        Ok(config)
    }

    /// The classifier described by [`Self::swappable_statuses`].
    #[must_use]
    pub fn classifier(&self) -> ResponseClassifier {
        ResponseClassifier::new(self.swappable_statuses.clone())
    }

    /// Parsed [`Self::log_level`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLogLevel`] if the name is not a tracing level.
    pub fn level(&self) -> Result<Level> {
        self.log_level
            .parse()
            .map_err(|_| Error::InvalidLogLevel(self.log_level.clone()))
    }
}
