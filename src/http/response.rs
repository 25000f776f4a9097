//! Response rendering for routing failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::routing::RouteError;

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'static str,
    method: &'a str,
    path: &'a str,
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        match self {
            RouteError::NotFound { method, path } => {
                let body = ErrorBody {
                    error: "not_found",
                    method: method.as_str(),
                    path: &path,
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
        }
    }
}
