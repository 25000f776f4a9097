//! Handler dispatch.
//!
//! The router only names a handler; what runs for that name is supplied by
//! the embedding application through [`Dispatch`].

use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::routing::RouteMatch;

/// Turns a matched route into a response.
pub trait Dispatch: Send + Sync + 'static {
    fn dispatch(&self, method: &Method, route: RouteMatch) -> Response;
}

/// Answers every match with a JSON description of the dispatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescribeDispatcher;

impl Dispatch for DescribeDispatcher {
    fn dispatch(&self, method: &Method, route: RouteMatch) -> Response {
        if *method == Method::HEAD {
            return (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
            )
                .into_response();
        }
        (StatusCode::OK, Json(route)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Params;

    #[tokio::test]
    async fn test_describe_dispatch() {
        let mut params = Params::new();
        params.insert("size".into(), "large".into());
        let route = RouteMatch {
            handler: "pages.kitten".into(),
            params,
        };

        let response = DescribeDispatcher.dispatch(&Method::GET, route.clone());
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["handler"], "pages.kitten");
        assert_eq!(json["params"]["size"], "large");

        let response = DescribeDispatcher.dispatch(&Method::HEAD, route);
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert!(bytes.is_empty());
    }
}
