//! Page router: an ordered, immutable route table behind an HTTP front.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::schema::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{RouteError, RouteMatch, Router};
