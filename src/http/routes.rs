//! Route handlers: relay, render, and the fixed collaborator endpoints.

use std::collections::HashMap;

use axum::{
    body::{Body, Bytes},
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use sha1::{Digest, Sha1};
use tokio_util::io::ReaderStream;

use crate::core::render;
use crate::domain::model::{NewUser, RelayBody, RenderVariables};
use crate::store;

use super::{AppState, SYSTEM_LOGIN, TEXT_HTML_UTF8, TEXT_PLAIN_UTF8};

fn plain(status: StatusCode, body: impl Into<String>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, TEXT_PLAIN_UTF8)],
        body.into(),
    )
        .into_response()
}

/// `GET /req/`: relay the document behind the `addr` query parameter.
pub async fn relay_query(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(addr) = params.get("addr").filter(|addr| !addr.is_empty()) else {
        return plain(StatusCode::BAD_REQUEST, "Missing addr query parameter");
    };
    relay(&state, addr).await
}

/// `POST /req/`: same relay, `addr` taken from the JSON body.
pub async fn relay_body(State(state): State<AppState>, body: Bytes) -> Response {
    let addr = serde_json::from_slice::<RelayBody>(&body)
        .ok()
        .and_then(|body| body.addr)
        .filter(|addr| !addr.is_empty());
    let Some(addr) = addr else {
        return plain(StatusCode::BAD_REQUEST, "Missing addr in body");
    };
    relay(&state, &addr).await
}

async fn relay(state: &AppState, addr: &str) -> Response {
    match state.fetcher.fetch(addr).await {
        Ok(body) => plain(StatusCode::OK, body),
        Err(err) => plain(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

/// `POST /render/`: fetch a template from `addr`, render it with the
/// `random2`/`random3` values from the body, return HTML.
///
/// Validation short-circuits in order: missing `addr` and missing variables
/// are client errors; an absent or unparseable body is reported as a server
/// configuration problem. A fetch failure and a render failure both map to
/// 500 but come from distinct error variants and are never conflated.
pub async fn render_remote(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let Some(addr) = params.get("addr").filter(|addr| !addr.is_empty()) else {
        return plain(StatusCode::BAD_REQUEST, "Missing addr query parameter");
    };

    let Ok(body) = serde_json::from_slice::<Value>(&body) else {
        tracing::error!("request body missing or unparseable on /render/");
        return plain(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server config error: request body is undefined.",
        );
    };

    let Some(variables) = RenderVariables::from_body(&body) else {
        tracing::error!(body = %body, "random2 or random3 not found in /render/ body");
        return plain(
            StatusCode::BAD_REQUEST,
            "Missing random2 or random3 in JSON body",
        );
    };

    let source = match state.fetcher.fetch(addr).await {
        Ok(source) => source,
        Err(err) => return plain(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    };

    match render::render_template(&source, &variables) {
        Ok(html) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, TEXT_HTML_UTF8)],
            html,
        )
            .into_response(),
        Err(err) => plain(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

/// `GET /login/`: the fixed identity string.
pub async fn login() -> Response {
    plain(StatusCode::OK, SYSTEM_LOGIN)
}

const ROUTES_SOURCE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/http/routes.rs");

/// `GET /code/`: stream this file from disk.
pub async fn code() -> Response {
    match tokio::fs::File::open(ROUTES_SOURCE).await {
        Ok(file) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, TEXT_PLAIN_UTF8)],
            Body::from_stream(ReaderStream::new(file)),
        )
            .into_response(),
        Err(err) => plain(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

/// `GET /sha1/{input}/`: lowercase hex SHA-1 of the path segment.
pub async fn sha1_digest(Path(input): Path<String>) -> Response {
    let digest = Sha1::digest(input.as_bytes());
    plain(StatusCode::OK, hex::encode(digest))
}

const INSERT_FIELDS_REQUIRED: &str =
    "Error: 'login', 'password', and 'URL' are required in the body.";

/// `POST /insert/`: create a user record in the store named by the body.
pub async fn insert_user(body: Bytes) -> Response {
    let Ok(user) = serde_json::from_slice::<NewUser>(&body) else {
        return plain(StatusCode::BAD_REQUEST, INSERT_FIELDS_REQUIRED);
    };

    let (Some(login), Some(password), Some(url)) = (
        user.login.filter(|value| !value.is_empty()),
        user.password.filter(|value| !value.is_empty()),
        user.url.filter(|value| !value.is_empty()),
    ) else {
        return plain(StatusCode::BAD_REQUEST, INSERT_FIELDS_REQUIRED);
    };

    match store::insert_user(&url, &login, &password).await {
        Ok(()) => plain(StatusCode::CREATED, "User created successfully."),
        Err(err) => plain(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

/// Catch-all: any other method/path answers 200 with the identity string.
pub async fn fallback() -> Response {
    plain(StatusCode::OK, SYSTEM_LOGIN)
}
