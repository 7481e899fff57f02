#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

#[doc(inline)]
pub use htmx_extras_core as shared;
#[doc(inline)]
pub use htmx_extras_web as web;

pub use htmx_extras_core::{ExtrasConfig, SwapStyle};
pub use htmx_extras_web::{HtmxExtras, HtmxExtrasBuilder, WebError, install, uninstall};

pub mod prelude {
    //! A collection of commonly used types for easy importing.
    //!
    //! ```rust,no_run
    //! use htmx_extras::prelude::*;
    //!
    //! # fn main() -> Result<(), WebError> {
    //! let _extras = HtmxExtrasBuilder::new()
    //!     .swap_style(SwapStyle::OuterHtml)
    //!     .screen_area_route("/book")
    //!     .install()?;
    //! # Ok(())
    //! # }
    //! ```
    pub use htmx_extras_core::{
        BannerConfig, ExtrasConfig, ScreenAreaRules, SwapOverride, SwapStyle, Viewport,
        classify_response,
    };
    pub use htmx_extras_web::{HtmxExtras, HtmxExtrasBuilder, WebError};
}
