//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign and propagate request ID)
//!     → routing::Router (method + path → RouteMatch | NotFound)
//!     → dispatch.rs (hand RouteMatch to the handler layer)
//!     → response.rs (NotFound → 404)
//!     → Send to client
//! ```

pub mod dispatch;
pub mod request;
pub mod response;
pub mod server;

pub use dispatch::{DescribeDispatcher, Dispatch};
pub use request::{request_id, X_REQUEST_ID};
pub use server::HttpServer;
