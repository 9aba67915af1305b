#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use relay_edge::{build_router, AppState, ServerConfig};

pub fn test_app() -> Router {
    app_with_upstream("https://example.com")
}

pub fn app_with_upstream(upstream: &str) -> Router {
    let config = ServerConfig {
        port: 0,
        wordpress_url: upstream.to_string(),
        verbose: false,
    };
    build_router(AppState::new(config))
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

pub fn post_json(path: &str, json: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
