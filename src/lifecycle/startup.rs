//! Startup orchestration.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;
use crate::routing::BuildError;

/// Fatal startup failures.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("route table: {0}")]
    Routes(#[from] BuildError),

    #[error("metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("invalid metrics address `{0}`")]
    MetricsAddress(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bring the service up and serve until `shutdown` fires.
pub async fn run(config: AppConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    // Subscribe before any await so a signal during startup is not lost.
    let shutdown_signal = shutdown.subscribe();
    let server = HttpServer::new(config.clone())?;

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    server.run(listener, shutdown_signal).await?;
    Ok(())
}
