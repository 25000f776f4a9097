//! Request matching primitives.
//!
//! # Responsibilities
//! - Match the request method against a rule's method
//! - Split a request path into segments for pattern matching
//!
//! # Design Decisions
//! - Method comparison is exact, except HEAD may fall back to GET
//! - Path splitting allocates nothing; segments borrow from the path
//! - Interior empty segments are kept so `//` never silently collapses

use axum::http::Method;

/// Matches the request method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodMatcher {
    method: Method,
    head_as_get: bool,
}

impl MethodMatcher {
    pub fn new(method: Method, head_as_get: bool) -> Self {
        Self {
            method,
            head_as_get,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns true if a request with `method` satisfies this rule.
    pub fn matches(&self, method: &Method) -> bool {
        if *method == self.method {
            return true;
        }
        self.head_as_get && *method == Method::HEAD && self.method == Method::GET
    }
}

/// Split a request path into segments.
///
/// The leading `/` and at most one trailing `/` are dropped; `/` yields no
/// segments. A trailing `/` is only dropped when something precedes it, so
/// `//` stays two empty segments. Anything after `?` is ignored.
pub fn split_path(path: &str) -> Vec<&str> {
    let path = path.split_once('?').map_or(path, |(p, _)| p);
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = strip_trailing_slash(path);

    if path.is_empty() {
        Vec::new()
    } else {
        path.split('/').collect()
    }
}

/// Drop one trailing `/` unless nothing would remain.
pub(crate) fn strip_trailing_slash(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    }
}
