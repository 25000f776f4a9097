//! Page router service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌──────────────────────────────────────────────┐
//!     ──────────────────────┼─▶ http server ─▶ routing ─▶ dispatch          │
//!                           │   (request id,   (first      (handler +       │
//!     Client Response       │    trace,        match       params)          │
//!     ◀─────────────────────┼──  timeout)      wins)   ──▶ 404 NotFound     │
//!                           │                                              │
//!                           │   config · observability · lifecycle         │
//!                           └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use page_router::config::{load_config, AppConfig};
use page_router::lifecycle::{startup, Shutdown};
use page_router::observability::logging;

#[derive(Parser)]
#[command(name = "page-router")]
#[command(about = "Serve the page route table over HTTP", long_about = None)]
struct Cli {
    /// TOML config file; built-in routes are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    logging::init(&config.observability)?;

    tracing::info!("page-router v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        routes = config.routes.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    startup::run(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
