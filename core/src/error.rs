//! Error types shared by the core helpers.

use thiserror::Error;

/// Errors produced while building links, parsing configuration or swap styles.
#[derive(Debug, Error)]
pub enum Error {
    /// A link or origin could not be parsed as a URL.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The JSON configuration could not be decoded.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// The swap style name is not one htmx understands.
    #[error("unknown swap style `{0}`")]
    UnknownSwapStyle(String),
    /// The configured log level is not a tracing level.
    #[error("invalid log level `{0}`")]
    InvalidLogLevel(String),
}

/// Convenience alias used across the core crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
