mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{body_string, get, post_json, test_app};

const IDENTITY: &str = "d5e5c122-0957-4501-971a-e81248c8522c";

#[tokio::test]
async fn login_returns_the_identity_string() {
    let app = test_app();

    let response = app.oneshot(get("/login/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/plain; charset=utf-8"
    );
    assert_eq!(body_string(response).await, IDENTITY);
}

#[tokio::test]
async fn every_response_carries_cors_and_identity_headers() {
    let app = test_app();

    let response = app.oneshot(get("/login/")).await.unwrap();

    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-methods"],
        "GET,POST,PUT,PATCH,OPTIONS,DELETE"
    );
    assert_eq!(
        headers["access-control-allow-headers"],
        "Content-Type, Authorization, ngrok-skip-browser-warning,Access-Control-Allow-Headers, x-test"
    );
    assert_eq!(headers["x-author"], IDENTITY);
}

#[tokio::test]
async fn options_requests_short_circuit_with_204() {
    let app = test_app();

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/req/")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(response.headers()["x-author"], IDENTITY);
    assert!(body_string(response).await.is_empty());
}

#[tokio::test]
async fn sha1_digests_the_path_segment() {
    let app = test_app();

    let response = app.oneshot(get("/sha1/abc/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_string(response).await,
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );
}

#[tokio::test]
async fn code_streams_the_route_source() {
    let app = test_app();

    let response = app.oneshot(get("/code/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/plain; charset=utf-8"
    );
    let source = body_string(response).await;
    assert!(source.contains("pub async fn relay_query"));
}

#[tokio::test]
async fn unknown_paths_fall_back_to_the_identity_string() {
    let app = test_app();

    let response = app.clone().oneshot(get("/anything/else")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, IDENTITY);

    let request = Request::builder()
        .method("DELETE")
        .uri("/nope")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, IDENTITY);

    // Wrong method on a known path is also swallowed by the catch-all.
    let request = Request::builder()
        .method("DELETE")
        .uri("/req/")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, IDENTITY);
}

#[tokio::test]
async fn insert_with_missing_fields_is_rejected() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json("/insert/", json!({"login": "alice"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_string(response).await,
        "Error: 'login', 'password', and 'URL' are required in the body."
    );

    // Empty strings are as missing as absent keys here.
    let response = app
        .oneshot(post_json(
            "/insert/",
            json!({"login": "alice", "password": "", "URL": "mongodb://localhost"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
