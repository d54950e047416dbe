use super::*;
use crate::Config;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::time::Duration;
use tower::ServiceExt;
use wiremock::MockServer;


/// Build a router whose providers point at a fresh wiremock server.
///
/// The two providers share one MockServer, separated by the `/to` and
/// `/me` base path prefixes.
async fn test_app() -> (Router, MockServer) {
    let server = MockServer::start().await;

    let mut config = Config::default();
    config.upstream.vidsrc_to_base = format!("{}/to", server.uri());
    config.upstream.vidsrc_me_base = format!("{}/me", server.uri());
    config.upstream.request_timeout = Duration::from_secs(5);

    let service = Arc::new(StreamService::new(config.clone()).unwrap());
    let config = Arc::new(config);
    (create_router(service, config), server)
}

/// Issue a GET against the router and return the response.
async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Read a response body to a UTF-8 string.
async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Read a response body as JSON.
async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_cors_headers_present_when_enabled() {
    let (app, _server) = test_app().await;

    let request = Request::builder()
        .uri("/health")
        .header("Origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin"),
        "CORS header should be present when CORS is enabled"
    );
}

#[tokio::test]
async fn test_cors_absent_when_disabled() {
    let server = MockServer::start().await;
    let mut config = Config::default();
    config.server.cors_enabled = false;
    config.upstream.vidsrc_to_base = format!("{}/to", server.uri());
    config.upstream.vidsrc_me_base = format!("{}/me", server.uri());

    let service = Arc::new(StreamService::new(config.clone()).unwrap());
    let app = create_router(service, Arc::new(config));

    let request = Request::builder()
        .uri("/health")
        .header("Origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        !response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (app, _server) = test_app().await;
    let response = get(app, "/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
