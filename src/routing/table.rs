//! Built-in route table for the pages controller.

use crate::config::RouteConfig;

/// `(method, path, handler)` in priority order.
const PAGE_ROUTES: &[(&str, &str, &str)] = &[
    ("GET", "/welcome", "pages.welcome"),
    ("GET", "/", "pages.welcome"),
    ("GET", "/about", "pages.about"),
    ("GET", "/contest", "pages.contest"),
    ("GET", "/kitten/{size}", "pages.kitten"),
    ("GET", "/kittens/{size}", "pages.kittens"),
    ("GET", "/secrets/{magic_word}", "pages.secrets"),
];

/// The route table used when no config file overrides it.
pub fn default_routes() -> Vec<RouteConfig> {
    PAGE_ROUTES
        .iter()
        .map(|(method, path, handler)| RouteConfig {
            method: (*method).to_string(),
            path: (*path).to_string(),
            handler: (*handler).to_string(),
        })
        .collect()
}
