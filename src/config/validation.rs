//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and value ranges (timeouts > 0)
//! - Compile every route pattern once to surface malformed routes early
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::routing::pattern::{PathPattern, PatternError};
use crate::routing::router::parse_method;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid {field} address `{value}`")]
    Address { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("no routes configured")]
    NoRoutes,

    #[error("route #{index}: unsupported method `{method}`")]
    Method { index: usize, method: String },

    #[error("route #{index}: {source}")]
    Pattern { index: usize, source: PatternError },

    #[error("route #{index}: handler must not be empty")]
    EmptyHandler { index: usize },
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::Address {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::Address {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }

    for (index, route) in config.routes.iter().enumerate() {
        if parse_method(&route.method).is_none() {
            errors.push(ValidationError::Method {
                index,
                method: route.method.clone(),
            });
        }
        if let Err(source) = PathPattern::parse(&route.path) {
            errors.push(ValidationError::Pattern { index, source });
        }
        if route.handler.trim().is_empty() {
            errors.push(ValidationError::EmptyHandler { index });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
