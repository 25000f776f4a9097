//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with a single routing fallback
//! - Wire up middleware (request ID, tracing, timeout)
//! - Dispatch requests through the route table
//! - Record per-request metrics

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::http::dispatch::{DescribeDispatcher, Dispatch};
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::lifecycle::shutdown::ShutdownSignal;
use crate::observability::metrics;
use crate::routing::{BuildError, Router as RouteTable};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub dispatcher: Arc<dyn Dispatch>,
}

/// HTTP server fronting the route table.
pub struct HttpServer {
    router: axum::Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a server that describes each dispatch as JSON.
    pub fn new(config: AppConfig) -> Result<Self, BuildError> {
        Self::with_dispatcher(config, Arc::new(DescribeDispatcher))
    }

    /// Create a server that hands matches to `dispatcher`.
    pub fn with_dispatcher(
        config: AppConfig,
        dispatcher: Arc<dyn Dispatch>,
    ) -> Result<Self, BuildError> {
        let routes = Arc::new(RouteTable::from_config(&config.routes, &config.routing)?);
        let state = AppState { routes, dispatcher };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> axum::Router {
        axum::Router::new()
            .fallback(route_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(propagate_request_id_layer())
            .layer(
                TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        request_id = %request_id(req),
                        method = %req.method(),
                        path = %req.uri().path(),
                    )
                }),
            )
            .layer(set_request_id_layer())
    }

    /// The configured Axum router, for in-process use.
    pub fn into_router(self) -> axum::Router {
        self.router
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.config.routes.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Looks up the route and hands the match to the dispatcher.
async fn route_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let method = request.method().clone();

    match state.routes.match_request(&request) {
        Ok(route) => {
            tracing::debug!(handler = %route.handler, params = ?route.params, "Route matched");
            let handler = route.handler.clone();
            let response = state.dispatcher.dispatch(&method, route);
            metrics::record_request(
                &method,
                &handler,
                response.status().as_u16(),
                start_time,
            );
            response
        }
        Err(err) => {
            tracing::debug!(error = %err, "No route matched");
            metrics::record_not_found(&method, start_time);
            err.into_response()
        }
    }
}
