//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceExt;

use page_router::{AppConfig, HttpServer, Shutdown};

/// Send one request through the full middleware stack without a socket.
#[allow(dead_code)]
pub async fn send(config: AppConfig, method: Method, uri: &str) -> Response<Body> {
    let app = HttpServer::new(config).unwrap().into_router();
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Start a server on an ephemeral port.
#[allow(dead_code)]
pub async fn start_server(
    config: AppConfig,
) -> (SocketAddr, Shutdown, JoinHandle<Result<(), std::io::Error>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown, handle)
}
