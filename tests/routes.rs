//! End-to-end routing through the HTTP stack.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use page_router::config::{RouteConfig, RoutingConfig};
use page_router::http::Dispatch;
use page_router::routing::BuildError;
use page_router::{AppConfig, HttpServer, RouteMatch};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_every_page_route() {
    let cases = [
        ("/welcome", "pages.welcome", None),
        ("/", "pages.welcome", None),
        ("/about", "pages.about", None),
        ("/contest", "pages.contest", None),
        ("/kitten/large", "pages.kitten", Some(("size", "large"))),
        ("/kittens/3", "pages.kittens", Some(("size", "3"))),
        ("/secrets/xyzzy", "pages.secrets", Some(("magic_word", "xyzzy"))),
    ];

    for (path, handler, param) in cases {
        let response = common::send(AppConfig::default(), Method::GET, path).await;
        assert_eq!(response.status(), StatusCode::OK, "path {}", path);

        let json = common::json_body(response).await;
        assert_eq!(json["handler"], handler, "path {}", path);
        match param {
            Some((name, value)) => assert_eq!(json["params"][name], value),
            None => assert_eq!(json["params"], serde_json::json!({})),
        }
    }
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let response = common::send(AppConfig::default(), Method::GET, "/unknown").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = common::json_body(response).await;
    assert_eq!(json["error"], "not_found");
    assert_eq!(json["path"], "/unknown");
}

#[tokio::test]
async fn test_post_is_404() {
    let response = common::send(AppConfig::default(), Method::POST, "/welcome").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = common::json_body(response).await;
    assert_eq!(json["method"], "POST");
}

#[tokio::test]
async fn test_query_string_ignored() {
    let response = common::send(AppConfig::default(), Method::GET, "/kitten/small?color=grey").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::json_body(response).await;
    assert_eq!(json["params"]["size"], "small");
}

#[tokio::test]
async fn test_head_follows_routing_option() {
    let response = common::send(AppConfig::default(), Method::HEAD, "/about").await;
    assert_eq!(response.status(), StatusCode::OK);

    let config = AppConfig {
        routing: RoutingConfig { head_as_get: false },
        ..AppConfig::default()
    };
    let response = common::send(config, Method::HEAD, "/about").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_request_id_on_every_response() {
    let ok = common::send(AppConfig::default(), Method::GET, "/about").await;
    let missing = common::send(AppConfig::default(), Method::GET, "/nope").await;

    for response in [ok, missing] {
        let id = response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert!(!id.is_empty());
    }
}

#[tokio::test]
async fn test_configured_routes_replace_defaults() {
    let config = AppConfig {
        routes: vec![
            RouteConfig::new("GET", "/kitten/:size", "pages.kitten"),
            RouteConfig::new("POST", "/contest", "pages.enter_contest"),
        ],
        ..AppConfig::default()
    };

    let response = common::send(config.clone(), Method::POST, "/contest").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::json_body(response).await;
    assert_eq!(json["handler"], "pages.enter_contest");

    let response = common::send(config, Method::GET, "/about").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Answers 418 and echoes what it was handed.
struct TeapotDispatcher {
    calls: Arc<AtomicUsize>,
}

impl Dispatch for TeapotDispatcher {
    fn dispatch(&self, method: &Method, route: RouteMatch) -> Response {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let body = serde_json::json!({
            "method": method.as_str(),
            "handler": route.handler,
            "params": route.params,
        });
        (StatusCode::IM_A_TEAPOT, Json(body)).into_response()
    }
}

#[tokio::test]
async fn test_custom_dispatcher_receives_matches() {
    let calls = Arc::new(AtomicUsize::new(0));
    let dispatcher = Arc::new(TeapotDispatcher {
        calls: calls.clone(),
    });
    let app = HttpServer::with_dispatcher(AppConfig::default(), dispatcher)
        .unwrap()
        .into_router();

    let request = Request::builder()
        .uri("/kittens/3")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    let json = common::json_body(response).await;
    assert_eq!(json["method"], "GET");
    assert_eq!(json["handler"], "pages.kittens");
    assert_eq!(json["params"]["size"], "3");
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // NotFound never reaches the dispatcher
    let request = Request::builder()
        .method(Method::POST)
        .uri("/kittens/3")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_server_rejects_route_without_handler() {
    let config = AppConfig {
        routes: vec![RouteConfig::new("GET", "/about", "")],
        ..AppConfig::default()
    };
    assert!(matches!(
        HttpServer::new(config),
        Err(BuildError::EmptyHandler { index: 0 })
    ));
}
