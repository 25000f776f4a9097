//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes
//! - Look up the first rule matching a request
//! - Return the matched handler with its params, or explicit NotFound
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in declaration order; first match wins
//! - Explicit NotFound rather than silent default

use axum::body::Body;
use axum::http::{Method, Request};
use serde::Serialize;
use thiserror::Error;

use crate::config::{RouteConfig, RoutingConfig};
use crate::routing::matcher::{split_path, MethodMatcher};
use crate::routing::pattern::{Params, PathPattern, PatternError};

/// A compiled route rule.
#[derive(Debug, Clone)]
pub struct RouteRule {
    pub method: MethodMatcher,
    pub pattern: PathPattern,
    pub handler: String,
}

/// Successful lookup result handed to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub handler: String,
    pub params: Params,
}

/// Routing failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no route for {method} {path}")]
    NotFound { method: Method, path: String },
}

/// Errors raised while compiling the route table.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("route #{index}: unsupported method `{method}`")]
    Method { index: usize, method: String },

    #[error("route #{index}: {source}")]
    Pattern {
        index: usize,
        #[source]
        source: PatternError,
    },

    #[error("route #{index}: handler must not be empty")]
    EmptyHandler { index: usize },
}

/// The compiled, read-only route table.
#[derive(Debug, Clone, Default)]
pub struct Router {
    rules: Vec<RouteRule>,
}

impl Router {
    /// Compile route definitions, keeping their order as match priority.
    pub fn from_config(routes: &[RouteConfig], options: &RoutingConfig) -> Result<Self, BuildError> {
        let rules = routes
            .iter()
            .enumerate()
            .map(|(index, route)| {
                let method = parse_method(&route.method).ok_or_else(|| BuildError::Method {
                    index,
                    method: route.method.clone(),
                })?;
                let pattern = PathPattern::parse(&route.path)
                    .map_err(|source| BuildError::Pattern { index, source })?;
                if route.handler.trim().is_empty() {
                    return Err(BuildError::EmptyHandler { index });
                }

                Ok(RouteRule {
                    method: MethodMatcher::new(method, options.head_as_get),
                    pattern,
                    handler: route.handler.clone(),
                })
            })
            .collect::<Result<Vec<_>, BuildError>>()?;

        tracing::debug!(routes = rules.len(), "Route table compiled");
        Ok(Self { rules })
    }

    pub fn routes(&self) -> &[RouteRule] {
        &self.rules
    }

    /// Find the first rule matching `method` and `path`.
    pub fn match_route(&self, method: &Method, path: &str) -> Result<RouteMatch, RouteError> {
        let segments = split_path(path);

        self.rules
            .iter()
            .filter(|rule| rule.method.matches(method))
            .find_map(|rule| {
                rule.pattern.captures(&segments).map(|params| RouteMatch {
                    handler: rule.handler.clone(),
                    params,
                })
            })
            .ok_or_else(|| RouteError::NotFound {
                method: method.clone(),
                path: path.to_string(),
            })
    }

    /// Match an HTTP request by its method and URI path.
    pub fn match_request(&self, req: &Request<Body>) -> Result<RouteMatch, RouteError> {
        self.match_route(req.method(), req.uri().path())
    }
}

/// Parse a configured method token (case-insensitive).
///
/// Only the standard methods a route may declare are accepted.
pub fn parse_method(token: &str) -> Option<Method> {
    let method = match token.to_ascii_uppercase().as_str() {
        "GET" => Method::GET,
        "HEAD" => Method::HEAD,
        "POST" => Method::POST,
        "PUT" => Method::PUT,
        "PATCH" => Method::PATCH,
        "DELETE" => Method::DELETE,
        "OPTIONS" => Method::OPTIONS,
        _ => return None,
    };
    Some(method)
}
