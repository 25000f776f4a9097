//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_requests_total` (counter): requests by method, handler, status
//! - `router_request_duration_seconds` (histogram): latency distribution
//! - `router_not_found_total` (counter): requests no route matched
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Unmatched requests are labelled `handler="none"`
//! - Extension methods share the `method="other"` label so clients cannot
//!   mint new series
//! - Recording without an installed exporter is a no-op

use std::net::SocketAddr;
use std::time::Instant;

use axum::http::Method;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Start the Prometheus scrape endpoint on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Label value for `method`; anything outside the standard set is `other`.
pub fn method_label(method: &Method) -> &'static str {
    match method.as_str() {
        "GET" => "GET",
        "HEAD" => "HEAD",
        "POST" => "POST",
        "PUT" => "PUT",
        "PATCH" => "PATCH",
        "DELETE" => "DELETE",
        "OPTIONS" => "OPTIONS",
        "CONNECT" => "CONNECT",
        "TRACE" => "TRACE",
        _ => "other",
    }
}

/// Record one routed request.
pub fn record_request(method: &Method, handler: &str, status: u16, start: Instant) {
    let status = status.to_string();
    metrics::counter!(
        "router_requests_total",
        "method" => method_label(method),
        "handler" => handler.to_string(),
        "status" => status
    )
    .increment(1);
    metrics::histogram!(
        "router_request_duration_seconds",
        "handler" => handler.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record a request no route matched.
pub fn record_not_found(method: &Method, start: Instant) {
    metrics::counter!("router_not_found_total", "method" => method_label(method)).increment(1);
    record_request(method, "none", 404, start);
}
