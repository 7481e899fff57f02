//! Events the glue reacts to.

use core::fmt;

/// An enumeration of the htmx and browser events that drive the glue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Event {
    /// htmx received an error status it is going to report.
    ResponseError,
    /// htmx could not send the request at all.
    SendError,
    /// htmx is about to swap a response in; the detail may be rewritten.
    BeforeSwap,
    /// htmx finished swapping new content in.
    AfterSwap,
    /// The initial document has been parsed.
    DomContentLoaded,
    /// The viewport changed size.
    Resize,
}

impl Event {
    /// The DOM event type string.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ResponseError => "htmx:responseError",
            Self::SendError => "htmx:sendError",
            Self::BeforeSwap => "htmx:beforeSwap",
            Self::AfterSwap => "htmx:afterSwap",
            Self::DomContentLoaded => "DOMContentLoaded",
            Self::Resize => "resize",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
