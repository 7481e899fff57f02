//! Screen-area aware links.
//!
//! The server picks how much content to render from the `screen_area` query
//! parameter, the product of the viewport's width and height. Every link into
//! the reader carries the current value, and the reader page reloads itself
//! whenever its own value goes stale.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::{Url, form_urlencoded};

use crate::Result;

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Viewport {
    /// `window.innerWidth`
    pub width: u32,
    /// `window.innerHeight`
    pub height: u32,
}

impl Viewport {
    /// Creates a viewport from its dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width times height, unclamped.
    #[must_use]
    pub const fn area(self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Where the screen area applies and how it is spelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreenAreaRules {
    /// Path prefix of links that receive the parameter; also the exact path
    /// of the page that reloads itself.
    pub route: String,
    /// Query parameter name.
    pub param: String,
    /// Attributes scanned for links.
    pub attributes: Vec<String>,
    /// Quiet period after the last resize before recomputing.
    #[serde(with = "millis")]
    pub debounce: Duration,
}

impl Default for ScreenAreaRules {
    fn default() -> Self {
        Self {
            route: "/book".into(),
            param: "screen_area".into(),
            attributes: vec!["hx-get".into(), "href".into()],
            debounce: Duration::from_millis(200),
        }
    }
}

impl ScreenAreaRules {
    /// CSS selector for elements whose `attribute` starts with the route.
    #[must_use]
    pub fn selector(&self, attribute: &str) -> String {
        format!("[{attribute}^=\"{}\"]", escape_css_string(&self.route))
    }
}

fn escape_css_string(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Parses a query value the way `parseInt(value, 10)` does.
///
/// Leading whitespace is skipped, one sign is accepted and the longest run of
/// digits is used; trailing garbage is ignored. Returns `None` when there are
/// no digits or the value does not fit an `i128`.
#[must_use]
pub fn parse_screen_area(raw: &str) -> Option<i128> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    if digits.is_empty() {
        return None;
    }
    let value: i128 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Sets `name` to `value` with `URLSearchParams.set` semantics.
///
/// The first pair named `name` is overwritten in place and later duplicates
/// are dropped; when there is none, the pair is appended. Other pairs keep
/// their order.
pub fn set_query_param(pairs: &mut Vec<(String, String)>, name: &str, value: &str) {
    let mut seen = false;
    pairs.retain_mut(|(key, current)| {
        if key != name {
            return true;
        }
        if seen {
            return false;
        }
        seen = true;
        value.clone_into(current);
        true
    });
    if !seen {
        pairs.push((name.to_string(), value.to_string()));
    }
}

fn parse_search(search: &str) -> Vec<(String, String)> {
    let query = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

fn serialize_search(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Decides whether the current page must reload with a fresh screen area.
///
/// Returns the new query string (without `?`) when `path` is exactly the
/// route and the page's own parameter is missing, unparseable, or differs
/// from `area`.
#[must_use]
pub fn navigation_search(path: &str, search: &str, area: u64, rules: &ScreenAreaRules) -> Option<String> {
    if path != rules.route {
        return None;
    }
    let mut pairs = parse_search(search);
    let current = pairs
        .iter()
        .find(|(key, _)| *key == rules.param)
        .and_then(|(_, value)| parse_screen_area(value));
    if current == Some(i128::from(area)) {
        return None;
    }
    set_query_param(&mut pairs, &rules.param, &area.to_string());
    Some(serialize_search(&pairs))
}

/// Resolves `value` against `origin` and stamps the screen area onto it.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidUrl`] when either `origin` or the resolved
/// link is not a valid URL.
pub fn rewrite_link(origin: &str, value: &str, area: u64, rules: &ScreenAreaRules) -> Result<String> {
    let mut url = Url::parse(origin)?.join(value)?;
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    set_query_param(&mut pairs, &rules.param, &area.to_string());
    url.query_pairs_mut().clear().extend_pairs(&pairs);
    Ok(url.into())
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
