//! Route state and navigation requests.

use serde::{Deserialize, Serialize};

/// The active route as seen by a mounted component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteState {
    /// Path pattern of the page (e.g. `/product/default/[slug]`).
    pub pathname: String,
    /// Identifying slug of the page, if the route has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl RouteState {
    /// Create a route without a slug.
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            slug: None,
        }
    }

    /// Set the route slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Compare against the next route.
    pub fn diff(&self, next: &RouteState) -> RouteChange {
        RouteChange {
            pathname_changed: self.pathname != next.pathname,
            slug_changed: self.slug != next.slug,
        }
    }
}

/// What changed between two routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteChange {
    pub pathname_changed: bool,
    pub slug_changed: bool,
}

impl RouteChange {
    /// True if nothing changed.
    pub fn is_unchanged(&self) -> bool {
        !self.pathname_changed && !self.slug_changed
    }
}

/// A navigation a component asks the router to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    /// Destination path.
    pub pathname: String,
    /// Query parameters, in insertion order.
    #[serde(default)]
    pub query: Vec<(String, String)>,
}

impl NavigationRequest {
    /// Create a request for a path with no query.
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            query: Vec::new(),
        }
    }

    /// Append a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Get a query parameter by name.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render as a URL path with form-encoded query string.
    pub fn to_url(&self) -> String {
        if self.query.is_empty() {
            return self.pathname.clone();
        }

        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", form_encode(k), form_encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.pathname, query)
    }
}

/// `application/x-www-form-urlencoded` encoding of a single component.
pub fn form_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for byte in s.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(byte as char)
            }
            b' ' => result.push('+'),
            _ => result.push_str(&format!("%{:02X}", byte)),
        }
    }
    result
}
