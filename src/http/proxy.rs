//! Passthrough proxy for the `/wordpress` prefix.
//!
//! Requests are forwarded to the configured upstream with the prefix
//! stripped; responses come back with the CORS and identity headers
//! rewritten. Bodies are buffered whole, matching the rest of the service.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use super::{AppState, SYSTEM_LOGIN, TEXT_PLAIN_UTF8, X_AUTHOR};

const PROXY_ALLOWED_METHODS: &str = "GET, POST, PUT, PATCH, OPTIONS, DELETE";
const PROXY_ALLOWED_HEADERS: &str = "Content-Type, Authorization, ngrok-skip-browser-warning";

pub async fn forward(State(state): State<AppState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();

    let upstream = state.config.wordpress_url.trim_end_matches('/');
    let rest = parts.uri.path().strip_prefix("/wordpress").unwrap_or("");
    let mut target = format!("{upstream}{rest}");
    if let Some(query) = parts.uri.query() {
        target.push('?');
        target.push_str(query);
    }

    let body = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => return proxy_error(err),
    };

    // Host must not leak through: the upstream sees its own origin.
    let mut request_headers = parts.headers;
    request_headers.remove(header::HOST);
    request_headers.remove(header::CONNECTION);
    request_headers.remove(header::CONTENT_LENGTH);
    request_headers.remove(header::TRANSFER_ENCODING);

    tracing::debug!(%target, method = %parts.method, "proxying request upstream");

    let upstream_response = match state
        .client
        .request(parts.method, &target)
        .headers(request_headers)
        .body(body)
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => return proxy_error(err),
    };

    let status = upstream_response.status();
    let mut headers = upstream_response.headers().clone();
    let bytes = match upstream_response.bytes().await {
        Ok(bytes) => bytes,
        Err(err) => return proxy_error(err),
    };

    headers.remove(header::CONNECTION);
    headers.remove(header::TRANSFER_ENCODING);
    headers.remove(header::CONTENT_LENGTH);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(PROXY_ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(PROXY_ALLOWED_HEADERS),
    );
    headers.insert(X_AUTHOR, HeaderValue::from_static(SYSTEM_LOGIN));

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}

fn proxy_error(err: impl std::fmt::Display) -> Response {
    tracing::error!(error = %err, "proxy request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, TEXT_PLAIN_UTF8)],
        format!("Proxy error: {err}"),
    )
        .into_response()
}
